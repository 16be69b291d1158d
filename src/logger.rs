//! 日志初始化模块

/// 初始化全局日志订阅器
///
/// 默认输出本 crate 的 info 级别日志，可通过 `RUST_LOG` 环境变量覆盖。
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "scrape_question_answer=info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
