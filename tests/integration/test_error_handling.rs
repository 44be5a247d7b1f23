// エラーハンドリングの統合テスト
use crate::fixtures::{MockMetricComputation, MockReducerConfig};
use bmi_average::{
    sample_records, BmiCalculator, DefaultReducerConfig, NoOpProgressReporter, ParallelReducer,
    Record, ReducerError,
};

#[tokio::test]
async fn test_invalid_height_is_reported_with_index() {
    let reducer = ParallelReducer::new(
        BmiCalculator::instant(),
        DefaultReducerConfig::default(),
        NoOpProgressReporter::new(),
    );
    let mut records = sample_records();
    records[2] = Record::new(0.0, 40.0);

    let error = reducer.compute_concurrent(&mut records).await.unwrap_err();

    assert!(matches!(error, ReducerError::InvalidRecord { index: 2, .. }));
    assert!(!error.is_recoverable());
    assert!(records.iter().all(|r| !r.is_computed()));
}

#[tokio::test]
async fn test_zero_worker_config_is_rejected() {
    let mut config = MockReducerConfig::new();
    config.expect_max_workers().return_const(0usize);
    config.expect_channel_buffer_size().return_const(10usize);
    config.expect_enable_progress_reporting().return_const(false);

    let reducer = ParallelReducer::new(
        BmiCalculator::instant(),
        config,
        NoOpProgressReporter::new(),
    );

    let error = reducer
        .compute_concurrent(&mut sample_records())
        .await
        .unwrap_err();

    assert!(matches!(error, ReducerError::ConfigurationError { .. }));
    assert!(error.to_string().contains("ワーカー数"));
}

#[tokio::test]
async fn test_sequential_ignores_pool_config() {
    let reducer = ParallelReducer::new(
        BmiCalculator::instant(),
        DefaultReducerConfig::default().with_max_workers(0),
        NoOpProgressReporter::new(),
    );

    let summary = reducer
        .compute_sequential(&mut sample_records())
        .await
        .unwrap();

    assert_eq!(summary.record_count, 5);
}

#[tokio::test]
async fn test_failed_unit_of_work_fails_the_reduction() {
    let mut metric = MockMetricComputation::new();
    metric.expect_name().return_const("flaky");
    metric.expect_compute().returning(|record| {
        if record.height == 1.8 {
            Err(anyhow::anyhow!("timeout talking to scale"))
        } else {
            Ok(record.weight)
        }
    });

    let reducer = ParallelReducer::new(
        metric,
        DefaultReducerConfig::default(),
        NoOpProgressReporter::new(),
    );

    let error = reducer
        .compute_concurrent(&mut sample_records())
        .await
        .unwrap_err();

    match error {
        ReducerError::ComputationError { index, message } => {
            assert_eq!(index, 1);
            assert!(message.contains("timeout talking to scale"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
