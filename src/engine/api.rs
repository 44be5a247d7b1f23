// 高レベル公開API
// ParallelReducerを簡単に使用できるようにするための便利な関数

use super::ParallelReducer;
use crate::{
    core::{Record, ReducerResult},
    services::{
        BmiCalculator, DefaultReducerConfig, NoOpProgressReporter, TracingProgressReporter,
    },
};

/// デフォルト構成のエンジン（BMI計算・1200ms遅延・tracing出力）
pub fn create_default_reducer(
) -> ParallelReducer<BmiCalculator, DefaultReducerConfig, TracingProgressReporter> {
    ParallelReducer::new(
        BmiCalculator::default(),
        DefaultReducerConfig::default(),
        TracingProgressReporter::new(),
    )
}

/// 静音版のエンジン（テスト・バックグラウンド処理用）
pub fn create_quiet_reducer(
) -> ParallelReducer<BmiCalculator, DefaultReducerConfig, NoOpProgressReporter> {
    ParallelReducer::new(
        BmiCalculator::default(),
        DefaultReducerConfig::default(),
        NoOpProgressReporter::new(),
    )
}

/// 逐次処理で平均BMIを求める（0件なら0.0）
pub async fn compute_sequential(records: &mut [Record]) -> ReducerResult<f64> {
    let summary = create_quiet_reducer().compute_sequential(records).await?;
    Ok(summary.average)
}

/// 並列処理で平均BMIを求める（0件なら0.0）
pub async fn compute_concurrent(records: &mut [Record]) -> ReducerResult<f64> {
    let summary = create_quiet_reducer().compute_concurrent(records).await?;
    Ok(summary.average)
}
