// パフォーマンス関連の統合テスト
use crate::fixtures::{generated_records, CountingMetric};
use bmi_average::{
    sample_records, BmiCalculator, DefaultReducerConfig, LatencyMode, NoOpProgressReporter,
    ParallelReducer,
};
use std::time::{Duration, Instant};

const UNIT: Duration = Duration::from_millis(1200);

#[tokio::test(start_paused = true)]
async fn test_concurrent_latency_is_one_unit() {
    let reducer = ParallelReducer::new(
        BmiCalculator::new(UNIT),
        DefaultReducerConfig::default(),
        NoOpProgressReporter::new(),
    );

    let sequential = reducer
        .compute_sequential(&mut sample_records())
        .await
        .unwrap();
    let concurrent = reducer
        .compute_concurrent(&mut sample_records())
        .await
        .unwrap();

    assert!(sequential.elapsed >= UNIT * 5);
    assert!(concurrent.elapsed >= UNIT);
    assert!(concurrent.elapsed < UNIT * 2);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_latency_independent_of_size() {
    for count in [1, 5, 16, 40] {
        let reducer = ParallelReducer::new(
            BmiCalculator::new(UNIT),
            DefaultReducerConfig::default().with_max_workers(64),
            NoOpProgressReporter::new(),
        );

        let summary = reducer
            .compute_concurrent(&mut generated_records(count))
            .await
            .unwrap();

        assert_eq!(summary.worker_count, count);
        assert!(summary.elapsed < UNIT * 2, "n={count}: {:?}", summary.elapsed);
    }
}

#[tokio::test(start_paused = true)]
async fn test_worker_cap_bounds_concurrency() {
    let metric = CountingMetric::new(Duration::from_millis(100));
    let reducer = ParallelReducer::new(
        metric.clone(),
        DefaultReducerConfig::default().with_max_workers(3),
        NoOpProgressReporter::new(),
    );

    let summary = reducer
        .compute_concurrent(&mut generated_records(10))
        .await
        .unwrap();

    // 10件を3ワーカー → ceil(10/3) = 4単位
    assert_eq!(summary.worker_count, 3);
    assert_eq!(metric.max_in_flight(), 3);
    assert!(summary.elapsed >= Duration::from_millis(400));
    assert!(summary.elapsed < Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_all_workers_actually_overlap() {
    let metric = CountingMetric::new(Duration::from_millis(100));
    let reducer = ParallelReducer::new(
        metric.clone(),
        DefaultReducerConfig::default(),
        NoOpProgressReporter::new(),
    );

    reducer
        .compute_concurrent(&mut sample_records())
        .await
        .unwrap();

    assert_eq!(metric.max_in_flight(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_blocking_mode_runs_in_parallel() {
    let unit = Duration::from_millis(200);
    let reducer = ParallelReducer::new(
        BmiCalculator::new(unit).with_latency_mode(LatencyMode::Blocking),
        DefaultReducerConfig::default(),
        NoOpProgressReporter::new(),
    );

    let start = Instant::now();
    let summary = reducer
        .compute_concurrent(&mut sample_records())
        .await
        .unwrap();
    let elapsed = start.elapsed();

    // 逐次なら1秒かかる
    assert!(elapsed >= unit);
    assert!(elapsed < unit * 4, "blocking mode took {elapsed:?}");
    assert_eq!(summary.record_count, 5);
}
