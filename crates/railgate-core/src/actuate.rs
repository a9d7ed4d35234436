use chrono::{DateTime, Utc};
use railgate_devices::SwitchHardware;
use railgate_schema::{SwitchDirection, SwitchOutcome};
use tracing::debug;

/// Attempt to throw the switch once before the given arrival time.
///
/// The hardware's outcome is returned verbatim; there is no retry. The
/// physical state change on `Success` belongs to the device.
pub fn actuate(
    hardware: &dyn SwitchHardware,
    direction: SwitchDirection,
    eta: DateTime<Utc>,
) -> SwitchOutcome {
    debug!("actuating switch to {direction}, next train at {eta}");
    hardware.set(direction, eta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgate_devices::mock::MockHardware;

    #[test]
    fn outcome_is_returned_verbatim() {
        for outcome in [
            SwitchOutcome::Success,
            SwitchOutcome::Stiff,
            SwitchOutcome::TooShort,
            SwitchOutcome::UnknownError,
        ] {
            let hardware = MockHardware::returning(outcome);
            assert_eq!(
                actuate(&hardware, SwitchDirection::Left, Utc::now()),
                outcome
            );
        }
    }

    #[test]
    fn single_attempt_only() {
        let hardware = MockHardware::returning(SwitchOutcome::Stiff);
        let eta = Utc::now();
        actuate(&hardware, SwitchDirection::Right, eta);
        assert_eq!(hardware.attempts(), vec![(SwitchDirection::Right, eta)]);
    }
}
