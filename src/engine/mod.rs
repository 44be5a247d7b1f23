// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod reducer;

// 公開API - 主要エンジンクラス
pub use api::{
    compute_concurrent, compute_sequential, create_default_reducer, create_quiet_reducer,
};
pub use pipeline::ReductionPipeline;
pub use reducer::{ParallelReducer, CONCURRENT_MODE, SEQUENTIAL_MODE};
