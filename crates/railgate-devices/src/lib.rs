//! Capability traits for the external collaborators of the Railgate core.
//!
//! The core never talks to credential cryptography, track sensors, switch
//! mechanics, or audit transport directly; it consumes the four narrow
//! traits defined here. Adapters supply real device integrations; the
//! `mock` module supplies deterministic stand-ins used by tests and by the
//! CLI until hardware integration lands.

pub mod audit;
pub mod hardware;
pub mod mock;
pub mod signal;
pub mod trust;

pub use audit::{AuditRecord, AuditSink};
pub use hardware::SwitchHardware;
pub use signal::TrackSignal;
pub use trust::CredentialTrust;
