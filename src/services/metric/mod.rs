// 派生値の計算
// 1レコードの計算と、計算に伴う人工的な遅延

pub mod bmi;

// 公開API
pub use bmi::{BmiCalculator, LatencyMode, DEFAULT_UNIT_LATENCY};
