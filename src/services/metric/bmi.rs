// BMI計算 - 固定遅延を伴う1レコード分の処理

use crate::core::{bmi, MetricComputation, Record};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// 1レコードあたりの既定の遅延
pub const DEFAULT_UNIT_LATENCY: Duration = Duration::from_millis(1200);

/// 遅延の掛け方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatencyMode {
    /// `tokio::time::sleep`で待機（ワーカーを占有しない）
    #[default]
    Suspending,
    /// blockingスレッドプール上で`std::thread::sleep`
    Blocking,
}

/// BMI計算器
#[derive(Debug, Clone)]
pub struct BmiCalculator {
    unit_latency: Duration,
    mode: LatencyMode,
}

impl BmiCalculator {
    pub fn new(unit_latency: Duration) -> Self {
        Self {
            unit_latency,
            mode: LatencyMode::default(),
        }
    }

    /// 遅延なし（ベンチマーク・テスト用）
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn with_latency_mode(mut self, mode: LatencyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn unit_latency(&self) -> Duration {
        self.unit_latency
    }

    pub fn latency_mode(&self) -> LatencyMode {
        self.mode
    }
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT_LATENCY)
    }
}

#[async_trait]
impl MetricComputation for BmiCalculator {
    async fn compute(&self, record: &Record) -> Result<f64> {
        let (height, weight) = (record.height, record.weight);

        let value = match self.mode {
            LatencyMode::Suspending => {
                if !self.unit_latency.is_zero() {
                    tokio::time::sleep(self.unit_latency).await;
                }
                bmi(height, weight)
            }
            LatencyMode::Blocking => {
                let latency = self.unit_latency;
                tokio::task::spawn_blocking(move || {
                    std::thread::sleep(latency);
                    bmi(height, weight)
                })
                .await?
            }
        };

        debug!(height, weight, bmi = value, "BMIを計算");
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "bmi"
    }
}
