//! Domain value types, outcome enums, and policy configuration for Railgate.
//!
//! This crate defines the schema layer: the request value (`SetCommand`),
//! the closed outcome sets returned by the external collaborators
//! (`ValidationOutcome`, `TrackStatus`, `SwitchOutcome`), and the gateway
//! policy file (`GatewayPolicy`) with its TOML parsing and validation.

pub mod outcome;
pub mod policy;
pub mod types;

pub use outcome::{SwitchOutcome, TrackStatus, ValidationOutcome};
pub use policy::{
    parse_policy_file, parse_policy_str, CompositionPolicy, GatewayPolicy, PolicyError,
    TelemetryPolicy,
};
pub use types::{CredentialRef, OperatorIdentity, SetCommand, SwitchDirection};
