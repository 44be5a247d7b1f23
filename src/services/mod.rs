// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod aggregation;
pub mod config;
pub mod metric;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use aggregation::spawn_result_collector;
pub use config::DefaultReducerConfig;
pub use metric::{BmiCalculator, LatencyMode, DEFAULT_UNIT_LATENCY};
pub use monitoring::{NoOpProgressReporter, TracingProgressReporter};
