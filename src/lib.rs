//! 固定遅延を伴う計算を、ワーカープールによる fan-out / fan-in で並列化し
//! 平均値を求める。
//!
//! 逐次処理では レコード数 × 1件あたりの遅延 かかる処理を、
//! およそ1件分の遅延で完了させる。

pub mod core;
pub mod engine;
pub mod logging;
pub mod services;

pub use crate::core::{
    sample_records, MetricComputation, ProgressReporter, Record, ReducerConfig, ReducerError,
    ReducerResult, ReductionSummary,
};
pub use engine::{compute_concurrent, compute_sequential, ParallelReducer};
pub use services::{
    BmiCalculator, DefaultReducerConfig, LatencyMode, NoOpProgressReporter,
    TracingProgressReporter,
};
