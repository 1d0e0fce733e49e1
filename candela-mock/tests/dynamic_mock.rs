use candela_mock::{DynamicMockSource, MockBehavior, MockSource};
use candela_types::{CandelaError, RawSample, Timeframe};

use candela_core::HistorySource;

#[tokio::test]
async fn fixture_history_is_deterministic_per_timeframe() {
    let source = MockSource::new();

    let first = source.history(Timeframe::M1).await.expect("fixture data");
    let second = source.history(Timeframe::M1).await.expect("fixture data");
    assert_eq!(first, second);
    assert_eq!(first.len(), 16);

    // Same price path, different bucket spacing.
    let hourly = source.history(Timeframe::H1).await.expect("fixture data");
    assert_eq!(hourly.len(), first.len());
    assert_eq!(hourly[0].open, first[0].open);

    let step: i64 =
        hourly[1].bucket.parse::<i64>().unwrap() - hourly[0].bucket.parse::<i64>().unwrap();
    assert_eq!(step, 3600);
}

#[tokio::test]
async fn unconfigured_timeframe_is_unsupported() {
    let (source, _controller) = DynamicMockSource::new_with_controller("dyn");
    let err = source.history(Timeframe::M3).await.unwrap_err();
    assert!(matches!(err, CandelaError::Unsupported { .. }));
}

#[tokio::test]
async fn scripted_return_and_failure() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");

    let samples = vec![RawSample::new("1700000000", "1", "2", "0.5", "1.5")];
    controller
        .set_history_behavior(Timeframe::M1, MockBehavior::Return(samples.clone()))
        .await;
    controller
        .set_history_behavior(
            Timeframe::H1,
            MockBehavior::Fail(CandelaError::status(500)),
        )
        .await;

    assert_eq!(source.history(Timeframe::M1).await.unwrap(), samples);
    assert_eq!(
        source.history(Timeframe::H1).await.unwrap_err(),
        CandelaError::status(500)
    );
}

#[tokio::test]
async fn request_log_records_the_sequence() {
    let (source, controller) = DynamicMockSource::new_with_controller("dyn");
    controller
        .set_history_behavior(Timeframe::M1, MockBehavior::Return(vec![]))
        .await;

    let _ = source.history(Timeframe::M1).await;
    let _ = source.history(Timeframe::M5).await;
    let _ = source.history(Timeframe::M1).await;

    assert_eq!(
        controller.get_history_requests().await,
        vec![Timeframe::M1, Timeframe::M5, Timeframe::M1]
    );

    controller.clear_all_behaviors().await;
    assert!(controller.get_history_requests().await.is_empty());
}
