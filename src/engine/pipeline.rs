// Pipeline - Producer-Consumer パイプライン
// fan-out（作業キュー + ワーカープール）と fan-in（単一Collector）の組み立て

use super::{
    consumer::spawn_consumers,
    producer::{spawn_producer, Job},
};
use crate::{
    core::{
        MetricComputation, MetricOutcome, ProgressReporter, Record, ReducerConfig, ReducerError,
        ReducerResult, ReductionSummary,
    },
    services::spawn_result_collector,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::debug;

/// 並列平均計算パイプライン
pub struct ReductionPipeline<M> {
    metric: Arc<M>,
}

impl<M> ReductionPipeline<M>
where
    M: MetricComputation + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(metric: Arc<M>) -> Self {
        Self { metric }
    }

    /// ワーカー数 = min(レコード数, 上限)
    pub fn worker_count<C: ReducerConfig>(total: usize, config: &C) -> usize {
        total.min(config.max_workers())
    }

    /// レコードリストを並列処理して平均を求める
    pub async fn execute<C, R>(
        &self,
        records: Vec<Record>,
        config: &C,
        reporter: Arc<R>,
    ) -> ReducerResult<ReductionSummary>
    where
        C: ReducerConfig,
        R: ProgressReporter + 'static,
    {
        let start_time = Instant::now();
        let total = records.len();

        if total == 0 {
            return Ok(ReductionSummary::empty(start_time.elapsed()));
        }

        let worker_count = Self::worker_count(total, config);
        debug!(total, worker_count, "パイプライン開始");

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<Job>(config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel::<MetricOutcome>(config.channel_buffer_size());

        // Producer起動
        let producer_handle = spawn_producer(records, work_tx);

        // Consumer Pool起動（result_txは各ワーカーのクローンのみ残る）
        let consumer_handles =
            spawn_consumers(Arc::clone(&self.metric), work_rx, result_tx, worker_count);

        // Result Collector起動
        let collector_handle = spawn_result_collector(result_rx, total, reporter);

        // Collectorの結果を先に確定させる
        let collected = collector_handle.await?;

        // Producer / Consumer完了を待機
        producer_handle.await?.map_err(ReducerError::internal)?;
        for handle in consumer_handles {
            handle.await?.map_err(ReducerError::internal)?;
        }

        let metrics = collected?;
        Ok(ReductionSummary::from_metrics(
            metrics,
            worker_count,
            start_time.elapsed(),
        ))
    }
}
