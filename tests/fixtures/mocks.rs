// テスト用のモック実装

use async_trait::async_trait;
use bmi_average::{core::bmi, MetricComputation, Record};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// mockallが生成したモックを再エクスポート
pub use bmi_average::core::traits::{
    MockMetricComputation, MockProgressReporter, MockReducerConfig,
};

/// 同時実行数を記録するBMI計算
#[derive(Debug, Clone, Default)]
pub struct CountingMetric {
    latency: Duration,
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl CountingMetric {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetricComputation for CountingMetric {
    async fn compute(&self, record: &Record) -> anyhow::Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        tokio::time::sleep(self.latency).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(bmi(record.height, record.weight))
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}
