// テスト用データ

use bmi_average::Record;

/// サンプル5件の平均BMI（参照計算値）
pub const SAMPLE_AVERAGE: f64 = 36.070_324_074_074_07;

/// 比較用の許容誤差
pub const TOLERANCE: f64 = 1e-9;

/// 決まった値の列からn件のレコードを生成
pub fn generated_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| Record::new(1.5 + (i % 5) as f64 * 0.1, 50.0 + i as f64))
        .collect()
}

/// 参照実装: 単純な平均
pub fn reference_average(records: &[Record]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records
        .iter()
        .map(|r| r.weight / (r.height * r.height))
        .sum();
    sum / records.len() as f64
}
