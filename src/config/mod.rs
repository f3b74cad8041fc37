pub mod load;
pub mod types;

pub use types::{
    Config, DEFAULT_METADATA_EXTENSION, DEFAULT_SEPARATOR, DEFAULT_SLASH_REPLACEMENT, Settings,
    UnmatchedAccounting,
};
