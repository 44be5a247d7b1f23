// ParallelReducer - 依存性注入による平均計算エンジン
// 逐次版（基準実装）と並列版の両方を提供する

use super::pipeline::ReductionPipeline;
use crate::{
    core::{
        MetricComputation, ProgressReporter, Record, ReducerConfig, ReducerError, ReducerResult,
        ReductionSummary,
    },
    services::NoOpProgressReporter,
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::info;

pub const SEQUENTIAL_MODE: &str = "sequential";
pub const CONCURRENT_MODE: &str = "concurrent";

/// 並列平均計算エンジン
///
/// 全ての依存関係をコンストラクタで注入する。ワーカー間で共有される
/// 依存関係は初期からArcで管理する。
pub struct ParallelReducer<M, C, R> {
    metric: Arc<M>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<M, C, R> ParallelReducer<M, C, R>
where
    M: MetricComputation + 'static,
    C: ReducerConfig,
    R: ProgressReporter + 'static,
{
    /// 新しいエンジンを作成
    pub fn new(metric: M, config: C, reporter: R) -> Self {
        Self {
            metric: Arc::new(metric),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// 1件ずつ順番に計算して平均を求める
    ///
    /// 所要時間はレコード数 × 1件あたりの遅延。0件なら平均0.0。
    pub async fn compute_sequential(
        &self,
        records: &mut [Record],
    ) -> ReducerResult<ReductionSummary> {
        Self::validate_records(records)?;

        let start_time = Instant::now();
        let total = records.len();
        self.report_started(SEQUENTIAL_MODE, total).await;

        let mut metrics = Vec::with_capacity(total);
        for (index, record) in records.iter().enumerate() {
            let value = self
                .metric
                .compute(record)
                .await
                .map_err(|e| ReducerError::computation(index, e.to_string()))?;
            metrics.push(value);

            if self.config.enable_progress_reporting() {
                self.reporter.report_progress(index + 1, total).await;
            }
        }

        // 全件成功した場合のみ書き戻す
        Self::write_back(records, &metrics);

        let worker_count = usize::from(total > 0);
        let summary = ReductionSummary::from_metrics(metrics, worker_count, start_time.elapsed());
        self.report_completed(SEQUENTIAL_MODE, &summary).await;
        Ok(summary)
    }

    /// ワーカープールで全レコードを同時に計算して平均を求める
    ///
    /// 所要時間はおよそ1件分の遅延（レコード数がワーカー上限以内の場合）。
    /// 0件なら平均0.0でワーカーは起動しない。
    pub async fn compute_concurrent(
        &self,
        records: &mut [Record],
    ) -> ReducerResult<ReductionSummary> {
        self.validate_config()?;
        Self::validate_records(records)?;

        self.report_started(CONCURRENT_MODE, records.len()).await;

        let pipeline = ReductionPipeline::new(Arc::clone(&self.metric));
        let summary = if self.config.enable_progress_reporting() {
            pipeline
                .execute(records.to_vec(), self.config.as_ref(), Arc::clone(&self.reporter))
                .await?
        } else {
            pipeline
                .execute(
                    records.to_vec(),
                    self.config.as_ref(),
                    Arc::new(NoOpProgressReporter::new()),
                )
                .await?
        };

        // 集約済みの値を入力順に書き戻す
        Self::write_back(records, &summary.metrics);

        self.report_completed(CONCURRENT_MODE, &summary).await;
        Ok(summary)
    }

    fn write_back(records: &mut [Record], metrics: &[f64]) {
        for (record, value) in records.iter_mut().zip(metrics) {
            record.bmi = Some(*value);
        }
    }

    fn validate_config(&self) -> ReducerResult<()> {
        if self.config.max_workers() == 0 {
            return Err(ReducerError::configuration(
                "ワーカー数の上限は1以上である必要があります",
            ));
        }

        if self.config.channel_buffer_size() == 0 {
            return Err(ReducerError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        Ok(())
    }

    fn validate_records(records: &[Record]) -> ReducerResult<()> {
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| ReducerError::invalid_record(index, reason))?;
        }
        Ok(())
    }

    async fn report_started(&self, mode: &str, total: usize) {
        info!(mode, total, metric = self.metric.name(), "平均計算を開始");
        if self.config.enable_progress_reporting() {
            self.reporter.report_started(mode, total).await;
        }
    }

    async fn report_completed(&self, mode: &str, summary: &ReductionSummary) {
        info!(
            mode,
            average = summary.average,
            workers = summary.worker_count,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "平均計算が完了"
        );
        if self.config.enable_progress_reporting() {
            self.reporter
                .report_completed(mode, summary.average, summary.elapsed)
                .await;
        }
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 計算単位への参照を取得
    pub fn metric(&self) -> &M {
        &self.metric
    }
}
