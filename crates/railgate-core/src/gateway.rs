use crate::actuate::actuate;
use crate::failure::Failure;
use crate::track::TrackStatusChecker;
use crate::verify::verify_operator;
use chrono::{DateTime, Utc};
use railgate_devices::{AuditSink, CredentialTrust, SwitchHardware, TrackSignal};
use railgate_schema::{
    CompositionPolicy, GatewayPolicy, OperatorIdentity, SetCommand, SwitchDirection, SwitchOutcome,
    TrackStatus, ValidationOutcome,
};
use tracing::{info, warn};

/// Orchestrates one switch request end to end.
///
/// A `Gateway` owns its four capabilities and a policy; `set` runs the
/// pipeline operator check → track check → actuation → audit, refusing the
/// request at the first failed step under the default fail-fast policy.
/// Requests are processed one at a time; every value involved is scoped to
/// a single `set` call.
pub struct Gateway {
    trust: Box<dyn CredentialTrust>,
    signal: Box<dyn TrackSignal>,
    hardware: Box<dyn SwitchHardware>,
    audit: Box<dyn AuditSink>,
    composition: CompositionPolicy,
    checker: TrackStatusChecker,
}

impl Gateway {
    pub fn new(
        trust: Box<dyn CredentialTrust>,
        signal: Box<dyn TrackSignal>,
        hardware: Box<dyn SwitchHardware>,
        audit: Box<dyn AuditSink>,
        policy: GatewayPolicy,
    ) -> Self {
        Self {
            trust,
            signal,
            hardware,
            audit,
            composition: policy.composition,
            checker: TrackStatusChecker::new(policy.telemetry),
        }
    }

    /// Decide whether the switch may be moved, and move it if so.
    ///
    /// On success the audit sink has been invoked exactly once with the
    /// verified operator's name and the direction from the original
    /// command. On failure nothing downstream of the failed step ran and
    /// the audit sink was not invoked.
    pub fn set(&self, cmd: &SetCommand) -> Result<(), Failure> {
        let result = match self.composition {
            CompositionPolicy::FailFast => self.set_fail_fast(cmd),
            CompositionPolicy::Aggregate => self.set_aggregating(cmd),
        };
        if let Err(failure) = &result {
            warn!("refused to set switch to {}: {failure}", cmd.direction);
        }
        result
    }

    /// Primary policy: short-circuit on the first failure. No step runs
    /// unless every step before it succeeded.
    fn set_fail_fast(&self, cmd: &SetCommand) -> Result<(), Failure> {
        let identity = match verify_operator(self.trust.as_ref(), &cmd.credential) {
            ValidationOutcome::Valid(identity) => identity,
            refused => return Err(Failure::UntrustedOperator(refused)),
        };
        let eta = self.free_track_eta()?;
        self.throw(cmd.direction, eta)?;
        self.audit_success(&identity, cmd.direction);
        Ok(())
    }

    /// Alternative policy: the operator check and the track check both
    /// run, and if both fail their failures are reported together, trust
    /// failure first. Actuation still requires both to have succeeded.
    fn set_aggregating(&self, cmd: &SetCommand) -> Result<(), Failure> {
        let operator = verify_operator(self.trust.as_ref(), &cmd.credential);
        let track = self.free_track_eta();

        let (identity, eta) = match (operator, track) {
            (ValidationOutcome::Valid(identity), Ok(eta)) => (identity, eta),
            (ValidationOutcome::Valid(_), Err(track_failure)) => return Err(track_failure),
            (refused, Ok(_)) => return Err(Failure::UntrustedOperator(refused)),
            (refused, Err(track_failure)) => {
                return Err(Failure::aggregate(
                    Failure::UntrustedOperator(refused),
                    track_failure,
                ))
            }
        };
        self.throw(cmd.direction, eta)?;
        self.audit_success(&identity, cmd.direction);
        Ok(())
    }

    fn free_track_eta(&self) -> Result<DateTime<Utc>, Failure> {
        match self.checker.check(self.signal.as_ref()) {
            TrackStatus::Free { eta } => Ok(eta),
            TrackStatus::Occupied { eta } => Err(Failure::TrackOccupied(eta)),
            status @ (TrackStatus::SensorFailure | TrackStatus::Unknown) => {
                Err(Failure::TelemetryError(status.to_string()))
            }
        }
    }

    fn throw(&self, direction: SwitchDirection, eta: DateTime<Utc>) -> Result<(), Failure> {
        match actuate(self.hardware.as_ref(), direction, eta) {
            SwitchOutcome::Success => Ok(()),
            refused => Err(Failure::SwitchError(refused.to_string())),
        }
    }

    fn audit_success(&self, identity: &OperatorIdentity, direction: SwitchDirection) {
        info!("{identity} has set the switch direction to {direction}");
        self.audit.record(&identity.name, direction);
    }
}
