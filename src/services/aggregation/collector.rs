// Collector - 結果収集機能

use crate::core::{MetricOutcome, ProgressReporter, ReducerError, ReducerResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::trace;

/// Collector: ちょうど`total`件の結果を受信し、入力順の値列を返す
///
/// 同じindexの結果が2回届いた場合、および`total`件揃う前に
/// チャンネルが閉じた場合はエラー。
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<MetricOutcome>,
    total: usize,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<ReducerResult<Vec<f64>>>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut slots: Vec<Option<f64>> = vec![None; total];
        let mut received = 0;

        while received < total {
            let Some(outcome) = result_rx.recv().await else {
                break; // 全ワーカー終了
            };

            let index = outcome.index();
            match outcome {
                MetricOutcome::Computed {
                    worker_id, value, ..
                } => {
                    let slot = slots.get_mut(index).ok_or_else(|| {
                        ReducerError::internal(anyhow::anyhow!(
                            "範囲外のindex: {index} (total={total})"
                        ))
                    })?;
                    if slot.replace(value).is_some() {
                        return Err(ReducerError::DuplicateResult { index });
                    }
                    trace!(index, worker_id, value, "結果を受信");
                }
                MetricOutcome::Failed { error, .. } => {
                    reporter.report_error(index, &error).await;
                    return Err(ReducerError::computation(index, error));
                }
            }

            received += 1;
            reporter.report_progress(received, total).await;
        }

        if received < total {
            return Err(ReducerError::MissingResults {
                expected: total,
                received,
            });
        }

        Ok(slots.into_iter().flatten().collect())
    })
}
