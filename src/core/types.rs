// 平均計算に関連するデータ型定義

use std::time::Duration;

/// サンプルデータ: (身長[m], 体重[kg])
pub const SAMPLE_MEASUREMENTS: [(f64, f64); 5] = [
    (1.5, 50.7),
    (1.8, 70.5),
    (1.2, 40.0),
    (1.6, 100.4),
    (1.2, 99.45),
];

/// 入力レコード
///
/// `bmi`は計算ステップで一度だけ書き込まれる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub height: f64,
    pub weight: f64,
    pub bmi: Option<f64>,
}

impl Record {
    pub fn new(height: f64, weight: f64) -> Self {
        Self {
            height,
            weight,
            bmi: None,
        }
    }

    /// BMIが計算済みかどうか
    pub fn is_computed(&self) -> bool {
        self.bmi.is_some()
    }

    /// 計算可能な値かどうかを検証
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err("身長は正の有限値である必要があります");
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err("体重は0以上の有限値である必要があります");
        }
        Ok(())
    }
}

/// BMI = 体重 / 身長²
pub fn bmi(height: f64, weight: f64) -> f64 {
    weight / (height * height)
}

/// サンプルレコードを生成
pub fn sample_records() -> Vec<Record> {
    SAMPLE_MEASUREMENTS
        .iter()
        .map(|&(height, weight)| Record::new(height, weight))
        .collect()
}

/// ワーカーからコレクターへ送られる個別結果
#[derive(Debug, Clone, PartialEq)]
pub enum MetricOutcome {
    Computed {
        index: usize,
        worker_id: usize,
        value: f64,
    },
    Failed {
        index: usize,
        error: String,
    },
}

impl MetricOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Computed { index, .. } | Self::Failed { index, .. } => *index,
        }
    }
}

/// 平均計算全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionSummary {
    /// 平均値（レコード0件の場合は0.0）
    pub average: f64,
    pub record_count: usize,
    /// 入力順に並んだ各レコードの値
    pub metrics: Vec<f64>,
    pub worker_count: usize,
    pub elapsed: Duration,
}

impl ReductionSummary {
    /// 0件入力時のサマリー
    pub fn empty(elapsed: Duration) -> Self {
        Self {
            average: 0.0,
            record_count: 0,
            metrics: Vec::new(),
            worker_count: 0,
            elapsed,
        }
    }

    /// 値の列から平均を求めてサマリーを作成
    pub fn from_metrics(metrics: Vec<f64>, worker_count: usize, elapsed: Duration) -> Self {
        let record_count = metrics.len();
        let average = if record_count > 0 {
            metrics.iter().sum::<f64>() / record_count as f64
        } else {
            0.0
        };

        Self {
            average,
            record_count,
            metrics,
            worker_count,
            elapsed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
