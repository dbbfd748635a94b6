use pamfax_client::model::retry::PollConfig;
use std::time::Duration;

#[test]
fn test_poll_config_fixed() {
    let config = PollConfig::fixed(3, 100);
    assert_eq!(config.max_attempts(), 3);
    assert_eq!(config.initial_interval(), Duration::from_millis(100));
    assert_eq!(
        config.next_interval(Duration::from_millis(100)),
        Duration::from_millis(100)
    );
}

#[test]
fn test_poll_config_exponential_grows_up_to_cap() {
    let config = PollConfig::exponential(10, 100, 1000);
    let mut interval = config.initial_interval();
    let mut seen = vec![interval.as_millis()];
    for _ in 0..5 {
        interval = config.next_interval(interval);
        seen.push(interval.as_millis());
    }
    assert_eq!(seen, vec![100, 200, 400, 800, 1000, 1000]);
}

#[test]
fn test_poll_config_at_least_one_attempt() {
    let config = PollConfig::fixed(0, 10);
    assert_eq!(config.max_attempts(), 1);
}

#[test]
fn test_poll_config_shrinking_factor_behaves_as_fixed() {
    let config = PollConfig {
        max_attempts: 5,
        interval_ms: 200,
        backoff_factor: 0.5,
        max_interval_ms: 1000,
    };
    assert_eq!(
        config.next_interval(Duration::from_millis(200)),
        Duration::from_millis(200)
    );

    let config = PollConfig {
        backoff_factor: f64::NAN,
        ..config
    };
    assert_eq!(
        config.next_interval(Duration::from_millis(200)),
        Duration::from_millis(200)
    );
}

#[test]
fn test_poll_config_cap_below_interval_uses_interval() {
    let config = PollConfig {
        max_attempts: 5,
        interval_ms: 500,
        backoff_factor: 2.0,
        max_interval_ms: 100,
    };
    assert_eq!(
        config.next_interval(Duration::from_millis(500)),
        Duration::from_millis(500)
    );
}

#[test]
fn test_poll_config_default() {
    let config = PollConfig::default();
    // Should use environment variables or defaults
    assert!(config.max_attempts() >= 1);
    assert!(config.backoff_factor >= 1.0);
}

#[test]
fn test_poll_config_serialization() {
    let config = PollConfig::exponential(4, 250, 2000);
    let json = serde_json::to_string(&config).unwrap();
    let back: PollConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_poll_config_huge_factor_stays_at_cap() {
    let config = PollConfig {
        max_attempts: 5,
        interval_ms: 100,
        backoff_factor: 1e300,
        max_interval_ms: 1000,
    };
    assert_eq!(
        config.next_interval(Duration::from_millis(100)),
        Duration::from_millis(1000)
    );
    assert_eq!(
        config.next_interval(Duration::from_secs(u64::MAX)),
        Duration::from_millis(1000)
    );
}
