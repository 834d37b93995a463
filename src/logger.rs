use tracing_subscriber::{
    fmt::{self, layer},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// 初始化日志系统
///
/// 默认级别 info（详细模式下为 debug），可用 `RUST_LOG` 覆盖
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .with_filter(env_filter);

    // 重复初始化时忽略
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

/// 测试用日志，可多次调用
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(
            layer()
                .with_test_writer()
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init();
}
