//! Closed outcome sets returned by the external collaborators.
//!
//! Every fallible collaborator answers with data from one of these enums,
//! never with an error channel of its own. The gateway maps non-success
//! variants into its failure model; nothing here carries behavior.

use crate::types::OperatorIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of validating an operator credential against the trust anchor.
///
/// Exactly one variant carries data: a credential that passed every check
/// yields the operator identity derived from its subject name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid(OperatorIdentity),
    /// The revocation list could not be downloaded, so revocation status
    /// is unknowable. Ordered before every other check.
    CrlUnreachable,
    Expired,
    NotYetValid,
    NotTrusted,
    Revoked,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(identity) => write!(f, "Credential accepted for {identity}"),
            Self::CrlUnreachable => f.write_str("Cannot download crl"),
            Self::Expired => f.write_str("Certificate is expired and not valid"),
            Self::NotYetValid => f.write_str("Certificate is not yet valid"),
            Self::NotTrusted => {
                f.write_str("Certificate is not issued from a trusted root and not valid")
            }
            Self::Revoked => f.write_str("Certificate is revoked and not valid"),
        }
    }
}

/// Occupancy status of the track segment ahead of the switch.
///
/// `Free` and `Occupied` carry the estimated arrival time of the next
/// train; the error variants carry nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackStatus {
    Free { eta: DateTime<Utc> },
    Occupied { eta: DateTime<Utc> },
    SensorFailure,
    Unknown,
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free { eta } => write!(f, "Track is free, next train expected at {eta}"),
            Self::Occupied { eta } => write!(f, "Track is occupied by train, arriving at {eta}"),
            Self::SensorFailure => {
                f.write_str("Could not check the track, no sensor data arrived")
            }
            Self::Unknown => f.write_str("Unknown error"),
        }
    }
}

/// Mechanical result of a single actuation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchOutcome {
    Success,
    Stiff,
    TooShort,
    UnknownError,
}

impl fmt::Display for SwitchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Switch set"),
            Self::Stiff => f.write_str("Mechanical error on switch. Cannot set"),
            Self::TooShort => f.write_str("Time to set is too short. Cannot set the switch"),
            Self::UnknownError => f.write_str("Unknown error set the switch"),
        }
    }
}
