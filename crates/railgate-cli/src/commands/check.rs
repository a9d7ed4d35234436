use super::{json_pretty, render_ok, render_refused, EXIT_FAILURE, EXIT_SUCCESS};
use railgate_core::TrackStatusChecker;
use railgate_devices::mock::MockSignal;
use railgate_schema::{GatewayPolicy, TrackStatus};

pub fn run(policy: &GatewayPolicy, arrival_seconds: i64, json: bool) -> Result<u8, String> {
    let checker = TrackStatusChecker::new(policy.telemetry);
    let status = checker.check(&MockSignal::new(arrival_seconds));

    if json {
        println!("{}", json_pretty(&status)?);
    } else if matches!(status, TrackStatus::Free { .. }) {
        println!("{}", render_ok(&status.to_string()));
    } else {
        println!("{}", render_refused(&status.to_string()));
    }

    Ok(match status {
        TrackStatus::Free { .. } => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    })
}
