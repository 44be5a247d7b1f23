// ロギング初期化

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// RUST_LOG未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// tracing subscriberを初期化（出力先はstderr）
///
/// 既に初期化済みの場合は何もしない。
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if initialized {
        debug!("logging initialized");
    }
}
