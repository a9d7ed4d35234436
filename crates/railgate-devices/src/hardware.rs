use chrono::{DateTime, Utc};
use railgate_schema::{SwitchDirection, SwitchOutcome};
use std::sync::Arc;

/// Switch mechanism capability.
///
/// One attempt to throw the switch before the given arrival time. The
/// outcome is reported verbatim; the device owns the physical state change
/// (on `Success` only) and any exclusivity over the mechanism.
pub trait SwitchHardware: Send + Sync {
    fn set(&self, direction: SwitchDirection, eta: DateTime<Utc>) -> SwitchOutcome;
}

impl<T: SwitchHardware + ?Sized> SwitchHardware for Arc<T> {
    fn set(&self, direction: SwitchDirection, eta: DateTime<Utc>) -> SwitchOutcome {
        (**self).set(direction, eta)
    }
}
