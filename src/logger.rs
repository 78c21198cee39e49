use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认级别为 `info`，`verbose` 时为 `debug`；设置了 `RUST_LOG` 时以其为准。
/// 重复调用不会 panic，测试中可以放心使用。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
