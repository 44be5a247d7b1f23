// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

/// tracingイベントによる進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct TracingProgressReporter;

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for TracingProgressReporter {
    async fn report_started(&self, mode: &str, total_records: usize) {
        info!(mode, total_records, "平均計算を開始");
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        debug!(completed, total, "進捗");
    }

    async fn report_error(&self, index: usize, error: &str) {
        warn!(index, error, "レコードの計算に失敗");
    }

    async fn report_completed(&self, mode: &str, average: f64, elapsed: Duration) {
        info!(mode, average, elapsed_ms = elapsed.as_millis() as u64, "平均計算が完了");
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _mode: &str, _total_records: usize) {}

    async fn report_progress(&self, _completed: usize, _total: usize) {}

    async fn report_error(&self, _index: usize, _error: &str) {}

    async fn report_completed(&self, _mode: &str, _average: f64, _elapsed: Duration) {}
}
