mod dir_listing;
mod path_validator;

pub use dir_listing::{DirListing, ListedEntry, raw_extension, split_extension};
pub use path_validator::validate_directory_exists;
