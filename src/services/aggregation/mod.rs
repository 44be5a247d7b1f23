// 結果集約機能
// ワーカーの結果を単一の受信点で収集する

pub mod collector;

// 公開API
pub use collector::spawn_result_collector;
