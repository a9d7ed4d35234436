use chrono::{DateTime, Duration, Utc};
use railgate_devices::TrackSignal;
use railgate_schema::{TelemetryPolicy, TrackStatus};
use tracing::debug;

/// Buckets a raw arrival reading into a track status.
///
/// The thresholds come from the telemetry policy; classification itself is
/// pure so the bucket boundaries can be pinned in tests with a fixed
/// clock.
#[derive(Debug, Clone, Copy)]
pub struct TrackStatusChecker {
    policy: TelemetryPolicy,
}

impl TrackStatusChecker {
    pub fn new(policy: TelemetryPolicy) -> Self {
        Self { policy }
    }

    /// Read the signal once and classify against the current time.
    pub fn check(&self, signal: &dyn TrackSignal) -> TrackStatus {
        let seconds = signal.measure_arrival_seconds();
        let status = self.classify(seconds, Utc::now());
        debug!("track signal reported {seconds}s: {status}");
        status
    }

    /// Classify an arrival reading of `seconds` taken at `now`.
    ///
    /// Closed-open buckets, in order: below `unknown_below` the reading is
    /// unusable, below `sensor_failure_below` no sensor data arrived,
    /// below `occupied_below` a train is inbound, otherwise the track is
    /// free. `Occupied` and `Free` carry `now + seconds` as the ETA.
    pub fn classify(&self, seconds: i64, now: DateTime<Utc>) -> TrackStatus {
        if seconds < self.policy.unknown_below {
            return TrackStatus::Unknown;
        }
        if seconds < self.policy.sensor_failure_below {
            return TrackStatus::SensorFailure;
        }
        let eta = now + Duration::seconds(seconds);
        if seconds < self.policy.occupied_below {
            TrackStatus::Occupied { eta }
        } else {
            TrackStatus::Free { eta }
        }
    }
}

impl Default for TrackStatusChecker {
    fn default() -> Self {
        Self::new(TelemetryPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgate_devices::mock::MockSignal;

    fn checker() -> TrackStatusChecker {
        TrackStatusChecker::default()
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-30T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn below_ten_is_unknown() {
        assert_eq!(checker().classify(0, fixed_now()), TrackStatus::Unknown);
        assert_eq!(checker().classify(9, fixed_now()), TrackStatus::Unknown);
    }

    #[test]
    fn ten_to_twenty_is_sensor_failure() {
        assert_eq!(
            checker().classify(10, fixed_now()),
            TrackStatus::SensorFailure
        );
        assert_eq!(
            checker().classify(19, fixed_now()),
            TrackStatus::SensorFailure
        );
    }

    #[test]
    fn twenty_to_thirty_is_occupied_with_eta() {
        let now = fixed_now();
        assert_eq!(
            checker().classify(20, now),
            TrackStatus::Occupied {
                eta: now + Duration::seconds(20)
            }
        );
        assert_eq!(
            checker().classify(29, now),
            TrackStatus::Occupied {
                eta: now + Duration::seconds(29)
            }
        );
    }

    #[test]
    fn thirty_and_above_is_free_with_eta() {
        let now = fixed_now();
        assert_eq!(
            checker().classify(30, now),
            TrackStatus::Free {
                eta: now + Duration::seconds(30)
            }
        );
        assert_eq!(
            checker().classify(3600, now),
            TrackStatus::Free {
                eta: now + Duration::seconds(3600)
            }
        );
    }

    #[test]
    fn negative_reading_is_unknown() {
        assert_eq!(checker().classify(-5, fixed_now()), TrackStatus::Unknown);
    }

    #[test]
    fn custom_thresholds_shift_the_buckets() {
        let checker = TrackStatusChecker::new(TelemetryPolicy {
            unknown_below: 2,
            sensor_failure_below: 4,
            occupied_below: 6,
        });
        let now = fixed_now();
        assert_eq!(checker.classify(1, now), TrackStatus::Unknown);
        assert_eq!(checker.classify(3, now), TrackStatus::SensorFailure);
        assert_eq!(
            checker.classify(5, now),
            TrackStatus::Occupied {
                eta: now + Duration::seconds(5)
            }
        );
        assert_eq!(
            checker.classify(6, now),
            TrackStatus::Free {
                eta: now + Duration::seconds(6)
            }
        );
    }

    #[test]
    fn check_reads_the_signal_once() {
        let signal = MockSignal::new(45);
        let status = checker().check(&signal);
        assert!(matches!(status, TrackStatus::Free { .. }));
        assert_eq!(signal.reads(), 1);
    }
}
