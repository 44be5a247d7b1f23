// Producer - レコード配信機能

use crate::core::Record;
use anyhow::Result;
use tokio::sync::mpsc;

/// 作業キューに流すジョブ（入力位置とレコード）
pub type Job = (usize, Record);

/// Producer: 全レコードを作業キューへ投入
pub fn spawn_producer(
    records: Vec<Record>,
    work_tx: mpsc::Sender<Job>,
) -> tokio::task::JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for job in records.into_iter().enumerate() {
            if (work_tx.send(job).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
