mod helpers;

use helpers::MockZone;
use pocket_dns_application::ports::ZoneLookup;
use pocket_dns_application::use_cases::{HandleDnsQueryUseCase, QueryStatsSnapshot};
use std::net::Ipv4Addr;
use std::sync::Arc;

fn make_use_case(zone: Arc<MockZone>) -> HandleDnsQueryUseCase {
    HandleDnsQueryUseCase::new(zone)
}

#[test]
fn test_execute_returns_zone_address() {
    let zone = Arc::new(MockZone::new().with_record("example.com", "93.184.216.34"));
    let use_case = make_use_case(zone.clone());

    assert_eq!(
        use_case.execute("example.com"),
        Some(Ipv4Addr::new(93, 184, 216, 34))
    );
    assert_eq!(zone.lookup_count(), 1);
}

#[test]
fn test_execute_miss_is_none() {
    let zone = Arc::new(MockZone::new().with_record("example.com", "93.184.216.34"));
    let use_case = make_use_case(zone);

    assert_eq!(use_case.execute("unknown.test"), None);
}

#[test]
fn test_execute_does_not_fold_case() {
    let zone = Arc::new(MockZone::new().with_record("localhost", "127.0.0.1"));
    let use_case = make_use_case(zone);

    assert_eq!(use_case.execute("LOCALHOST"), None);
}

#[test]
fn test_stats_count_hits_misses_and_drops() {
    let zone = Arc::new(MockZone::new().with_record("localhost", "127.0.0.1"));
    let use_case = make_use_case(zone);

    use_case.execute("localhost");
    use_case.execute("localhost");
    use_case.execute("missing.test");
    use_case.record_dropped();

    assert_eq!(
        use_case.stats().snapshot(),
        QueryStatsSnapshot {
            queries: 3,
            hits: 2,
            misses: 1,
            dropped: 1,
        }
    );
}

#[test]
fn test_hit_rate() {
    let snapshot = QueryStatsSnapshot {
        queries: 4,
        hits: 3,
        misses: 1,
        dropped: 0,
    };
    assert!((snapshot.hit_rate() - 75.0).abs() < f64::EPSILON);
    assert_eq!(QueryStatsSnapshot::default().hit_rate(), 0.0);
}

#[test]
fn test_zone_size_and_empty_default() {
    let zone = Arc::new(MockZone::new());
    assert!(zone.is_empty());

    let zone = Arc::new(
        MockZone::new()
            .with_record("a.test", "10.0.0.1")
            .with_record("b.test", "10.0.0.2"),
    );
    assert_eq!(make_use_case(zone).zone_size(), 2);
}

#[test]
fn test_shared_across_threads() {
    let zone = Arc::new(MockZone::new().with_record("localhost", "127.0.0.1"));
    let use_case = Arc::new(make_use_case(zone));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let use_case = Arc::clone(&use_case);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(use_case.execute("localhost"), Some(Ipv4Addr::LOCALHOST));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(use_case.stats().snapshot().hits, 400);
}
