// 並列平均計算システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::Record;
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// 並列処理の設定を抽象化するトレイト
#[automock]
pub trait ReducerConfig: Send + Sync {
    /// ワーカープールの上限数を取得
    fn max_workers(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// ReducerConfig for Box<dyn ReducerConfig>
impl ReducerConfig for Box<dyn ReducerConfig> {
    fn max_workers(&self) -> usize {
        self.as_ref().max_workers()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 1レコード分の計算単位（遅延を伴う処理）を抽象化するトレイト
#[automock]
#[async_trait]
pub trait MetricComputation: Send + Sync {
    /// レコードから派生値を計算
    async fn compute(&self, record: &Record) -> Result<f64>;

    /// 計算名（ログ出力用）
    fn name(&self) -> &'static str;
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, mode: &str, total_records: usize);

    /// 進捗更新の報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, index: usize, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, mode: &str, average: f64, elapsed: Duration);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, mode: &str, total_records: usize) {
        self.as_ref().report_started(mode, total_records).await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_error(&self, index: usize, error: &str) {
        self.as_ref().report_error(index, error).await
    }

    async fn report_completed(&self, mode: &str, average: f64, elapsed: Duration) {
        self.as_ref().report_completed(mode, average, elapsed).await
    }
}
