// Consumer - 並列ワーカー機能

use super::producer::Job;
use crate::core::{MetricComputation, MetricOutcome};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// 複数ワーカーで共有する作業キューの受信側
pub type SharedWorkReceiver = Arc<Mutex<mpsc::Receiver<Job>>>;

/// 単一Consumerワーカー
pub fn spawn_single_consumer<M>(
    worker_id: usize,
    metric: Arc<M>,
    work_rx: SharedWorkReceiver,
    result_tx: mpsc::Sender<MetricOutcome>,
) -> tokio::task::JoinHandle<Result<()>>
where
    M: MetricComputation + 'static,
{
    tokio::spawn(async move {
        let mut handled = 0usize;
        loop {
            // 次の作業を取得（ロックは受信の間だけ保持）
            let (index, record) = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(job) => job,
                    None => break, // チャンネル終了
                }
            };

            let outcome = match metric.compute(&record).await {
                Ok(value) => MetricOutcome::Computed {
                    index,
                    worker_id,
                    value,
                },
                Err(error) => MetricOutcome::Failed {
                    index,
                    error: error.to_string(),
                },
            };

            // 結果送信
            if (result_tx.send(outcome).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
            handled += 1;
        }
        debug!(worker_id, handled, "ワーカー終了");
        Ok(())
    })
}

/// Consumers: 並列ワーカープール
pub fn spawn_consumers<M>(
    metric: Arc<M>,
    work_rx: mpsc::Receiver<Job>,
    result_tx: mpsc::Sender<MetricOutcome>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    M: MetricComputation + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                Arc::clone(&metric),
                Arc::clone(&work_rx),
                result_tx.clone(),
            )
        })
        .collect()
}
