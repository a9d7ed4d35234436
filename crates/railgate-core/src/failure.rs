use chrono::{DateTime, Utc};
use railgate_schema::ValidationOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The common currency of every refused request.
///
/// All failures are data returned to the caller; nothing in the core
/// panics or retries. `Aggregated` is produced only by the aggregating
/// composition policy and always holds at least two entries in the order
/// the underlying checks ran.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Failure {
    #[error("untrusted operator: {0}")]
    UntrustedOperator(ValidationOutcome),
    #[error("{0}")]
    TelemetryError(String),
    #[error("Track is occupied by train, arriving at {0}")]
    TrackOccupied(DateTime<Utc>),
    #[error("{0}")]
    SwitchError(String),
    #[error("{}", render_list(.0))]
    Aggregated(Vec<Failure>),
}

impl Failure {
    /// Combine two failures into one aggregated failure, preserving input
    /// order. Inputs that are already aggregated are spliced in rather
    /// than nested, so the entry list stays flat and never holds an
    /// `Aggregated` member or fewer than two entries.
    pub fn aggregate(a: Failure, b: Failure) -> Failure {
        let mut entries = Vec::new();
        for failure in [a, b] {
            match failure {
                Failure::Aggregated(inner) => entries.extend(inner),
                other => entries.push(other),
            }
        }
        Failure::Aggregated(entries)
    }
}

fn render_list(entries: &[Failure]) -> String {
    let parts: Vec<String> = entries.iter().map(ToString::to_string).collect();
    format!("multiple failures: {}", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgate_schema::OperatorIdentity;

    fn trust_failure() -> Failure {
        Failure::UntrustedOperator(ValidationOutcome::Expired)
    }

    fn telemetry_failure() -> Failure {
        Failure::TelemetryError("Unknown error".to_owned())
    }

    #[test]
    fn aggregate_preserves_order() {
        let combined = Failure::aggregate(trust_failure(), telemetry_failure());
        assert_eq!(
            combined,
            Failure::Aggregated(vec![trust_failure(), telemetry_failure()])
        );
    }

    #[test]
    fn aggregate_splices_left_aggregate() {
        let left = Failure::aggregate(trust_failure(), telemetry_failure());
        let combined = Failure::aggregate(left, Failure::SwitchError("stuck".to_owned()));
        assert_eq!(
            combined,
            Failure::Aggregated(vec![
                trust_failure(),
                telemetry_failure(),
                Failure::SwitchError("stuck".to_owned()),
            ])
        );
    }

    #[test]
    fn aggregate_splices_right_aggregate() {
        let right = Failure::aggregate(telemetry_failure(), Failure::SwitchError("stuck".to_owned()));
        let combined = Failure::aggregate(trust_failure(), right);
        let Failure::Aggregated(entries) = combined else {
            panic!("expected aggregated failure");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], trust_failure());
        assert!(entries.iter().all(|e| !matches!(e, Failure::Aggregated(_))));
    }

    #[test]
    fn aggregate_never_yields_singleton() {
        let combined = Failure::aggregate(trust_failure(), telemetry_failure());
        let Failure::Aggregated(entries) = &combined else {
            panic!("expected aggregated failure");
        };
        assert!(entries.len() >= 2);
    }

    #[test]
    fn equality_is_by_variant_and_payload() {
        assert_eq!(trust_failure(), trust_failure());
        assert_ne!(
            trust_failure(),
            Failure::UntrustedOperator(ValidationOutcome::Revoked)
        );
        assert_ne!(trust_failure(), telemetry_failure());
        assert_ne!(
            Failure::UntrustedOperator(ValidationOutcome::Valid(OperatorIdentity::new("a"))),
            Failure::UntrustedOperator(ValidationOutcome::Valid(OperatorIdentity::new("b")))
        );
    }

    #[test]
    fn display_wraps_the_underlying_outcome() {
        assert_eq!(
            trust_failure().to_string(),
            "untrusted operator: Certificate is expired and not valid"
        );
        assert_eq!(telemetry_failure().to_string(), "Unknown error");
        let combined = Failure::aggregate(trust_failure(), telemetry_failure());
        assert_eq!(
            combined.to_string(),
            "multiple failures: untrusted operator: Certificate is expired and not valid; Unknown error"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let combined = Failure::aggregate(trust_failure(), telemetry_failure());
        let json = serde_json::to_string(&combined).unwrap();
        let back: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, combined);
    }
}
