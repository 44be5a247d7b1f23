use anyhow::Result;

use bmi_average::{engine::create_default_reducer, logging::init_logging, sample_records};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let reducer = create_default_reducer();

    // 逐次処理（1件ずつ）
    let mut people = sample_records();
    let summary = reducer.compute_sequential(&mut people).await?;
    println!(
        "逐次処理 - 平均BMI: {:.2} (所要時間: {:.2?})",
        summary.average, summary.elapsed
    );

    // 並列処理（ワーカープール）
    let mut people = sample_records();
    let summary = reducer.compute_concurrent(&mut people).await?;
    println!(
        "並列処理 - 平均BMI: {:.2} (所要時間: {:.2?})",
        summary.average, summary.elapsed
    );

    Ok(())
}
