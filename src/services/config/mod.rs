// 並列処理の設定管理

pub mod implementations;

// 公開API
pub use implementations::DefaultReducerConfig;
