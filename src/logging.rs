//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 安装全局 tracing 订阅者，输出到 stderr
///
/// `verbose` 时使用 debug 级别，否则优先读取 `RUST_LOG`，默认 warn。
/// 重复调用不会出错。
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
