//! Core orchestration for the Railgate switch gateway.
//!
//! This crate ties the capability traits together into the `Gateway` —
//! the single entry point that verifies the requesting operator, checks
//! track occupancy, actuates the switch, and audits the result. It also
//! defines the `Failure` model that every refused request is reported
//! through.

pub mod actuate;
pub mod failure;
pub mod gateway;
pub mod track;
pub mod verify;

pub use actuate::actuate;
pub use failure::Failure;
pub use gateway::Gateway;
pub use track::TrackStatusChecker;
pub use verify::verify_operator;
