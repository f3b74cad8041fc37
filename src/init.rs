use env_logger::{Builder, Env, Target};

/// 初始化日誌，`RUST_LOG` 可覆寫預設的 warn 等級
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
