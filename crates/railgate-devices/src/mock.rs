//! Deterministic mock devices.
//!
//! Every mock is scripted at construction and records what it was asked,
//! so pipeline behavior is reproducible and observable. The CLI wires
//! these in place of real device adapters until hardware integration
//! exists; tests use them to assert which collaborators ran.

use crate::audit::{AuditRecord, AuditSink};
use crate::hardware::SwitchHardware;
use crate::signal::TrackSignal;
use crate::trust::CredentialTrust;
use chrono::{DateTime, Utc};
use railgate_schema::{CredentialRef, SwitchDirection, SwitchOutcome};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrustVerdict {
    Trusted,
    CrlUnreachable,
    Expired,
    NotYetValid,
    Revoked,
    NotTrusted,
}

/// Trust checker with a fixed verdict, answering the individual checks the
/// way a real validator holding that verdict would.
pub struct MockTrust {
    verdict: TrustVerdict,
    subject: String,
    queries: AtomicUsize,
}

impl MockTrust {
    fn with_verdict(verdict: TrustVerdict, subject: &str) -> Self {
        Self {
            verdict,
            subject: subject.to_owned(),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn trusted(subject: &str) -> Self {
        Self::with_verdict(TrustVerdict::Trusted, subject)
    }

    pub fn crl_unreachable() -> Self {
        Self::with_verdict(TrustVerdict::CrlUnreachable, "")
    }

    pub fn expired() -> Self {
        Self::with_verdict(TrustVerdict::Expired, "")
    }

    pub fn not_yet_valid() -> Self {
        Self::with_verdict(TrustVerdict::NotYetValid, "")
    }

    pub fn revoked() -> Self {
        Self::with_verdict(TrustVerdict::Revoked, "")
    }

    pub fn untrusted() -> Self {
        Self::with_verdict(TrustVerdict::NotTrusted, "")
    }

    /// Number of individual checks answered so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn tally(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }
}

impl CredentialTrust for MockTrust {
    fn can_check_revocation(&self, _credential: &CredentialRef) -> bool {
        self.tally();
        self.verdict != TrustVerdict::CrlUnreachable
    }

    fn is_expired(&self, _credential: &CredentialRef) -> bool {
        self.tally();
        self.verdict == TrustVerdict::Expired
    }

    fn is_not_yet_valid(&self, _credential: &CredentialRef) -> bool {
        self.tally();
        self.verdict == TrustVerdict::NotYetValid
    }

    fn is_revoked(&self, _credential: &CredentialRef) -> bool {
        self.tally();
        self.verdict == TrustVerdict::Revoked
    }

    fn is_trusted(&self, _credential: &CredentialRef) -> bool {
        self.tally();
        self.verdict != TrustVerdict::NotTrusted
    }

    fn subject_name(&self, _credential: &CredentialRef) -> String {
        self.tally();
        self.subject.clone()
    }
}

/// Signal reporting a fixed arrival time, counting reads.
pub struct MockSignal {
    seconds: i64,
    reads: AtomicUsize,
}

impl MockSignal {
    pub fn new(seconds: i64) -> Self {
        Self {
            seconds,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl TrackSignal for MockSignal {
    fn measure_arrival_seconds(&self) -> i64 {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.seconds
    }
}

/// Switch mechanism with a scripted outcome, recording every attempt.
pub struct MockHardware {
    outcome: SwitchOutcome,
    attempts: Mutex<Vec<(SwitchDirection, DateTime<Utc>)>>,
}

impl MockHardware {
    pub fn returning(outcome: SwitchOutcome) -> Self {
        Self {
            outcome,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::returning(SwitchOutcome::Success)
    }

    pub fn attempts(&self) -> Vec<(SwitchDirection, DateTime<Utc>)> {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SwitchHardware for MockHardware {
    fn set(&self, direction: SwitchDirection, eta: DateTime<Utc>) -> SwitchOutcome {
        debug!("mock hardware: set {direction} before {eta}");
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((direction, eta));
        self.outcome
    }
}

/// Audit sink keeping records in memory.
#[derive(Default)]
pub struct MemoryAudit {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, operator: &str, direction: SwitchDirection) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(AuditRecord {
                operator: operator.to_owned(),
                direction,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cred() -> CredentialRef {
        CredentialRef::from("mock.pem")
    }

    #[test]
    fn trusted_mock_answers_every_check() {
        let trust = MockTrust::trusted("CN=Alice");
        let c = cred();
        assert!(trust.can_check_revocation(&c));
        assert!(!trust.is_expired(&c));
        assert!(!trust.is_not_yet_valid(&c));
        assert!(!trust.is_revoked(&c));
        assert!(trust.is_trusted(&c));
        assert_eq!(trust.subject_name(&c), "CN=Alice");
        assert_eq!(trust.queries(), 6);
    }

    #[test]
    fn expired_mock_only_fails_expiry() {
        let trust = MockTrust::expired();
        let c = cred();
        assert!(trust.can_check_revocation(&c));
        assert!(trust.is_expired(&c));
        assert!(!trust.is_revoked(&c));
        assert!(trust.is_trusted(&c));
    }

    #[test]
    fn crl_unreachable_mock() {
        let trust = MockTrust::crl_unreachable();
        assert!(!trust.can_check_revocation(&cred()));
    }

    #[test]
    fn signal_counts_reads() {
        let signal = MockSignal::new(45);
        assert_eq!(signal.reads(), 0);
        assert_eq!(signal.measure_arrival_seconds(), 45);
        assert_eq!(signal.measure_arrival_seconds(), 45);
        assert_eq!(signal.reads(), 2);
    }

    #[test]
    fn hardware_records_attempts() {
        let hardware = MockHardware::returning(SwitchOutcome::Stiff);
        let eta = Utc::now();
        assert_eq!(
            hardware.set(SwitchDirection::Right, eta),
            SwitchOutcome::Stiff
        );
        let attempts = hardware.attempts();
        assert_eq!(attempts, vec![(SwitchDirection::Right, eta)]);
    }

    #[test]
    fn memory_audit_keeps_order() {
        let audit = MemoryAudit::new();
        audit.record("CN=Alice", SwitchDirection::Left);
        audit.record("CN=Bob", SwitchDirection::Right);
        let records = audit.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].operator, "CN=Alice");
        assert_eq!(records[1].direction, SwitchDirection::Right);
    }
}
