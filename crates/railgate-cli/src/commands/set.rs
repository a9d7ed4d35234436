use super::{json_pretty, render_ok, render_refused, StdoutAudit, EXIT_FAILURE, EXIT_SUCCESS};
use railgate_core::Gateway;
use railgate_devices::mock::{MemoryAudit, MockHardware, MockSignal, MockTrust};
use railgate_devices::AuditSink;
use railgate_schema::{GatewayPolicy, SetCommand, SwitchDirection, SwitchOutcome};
use std::sync::Arc;

/// Scripted stand-ins for the trust, signal, and hardware adapters.
pub struct SimulatedDevices {
    pub trust: MockTrust,
    pub arrival_seconds: i64,
    pub outcome: SwitchOutcome,
}

pub fn run(
    policy: &GatewayPolicy,
    credential: &str,
    direction: SwitchDirection,
    devices: SimulatedDevices,
    json: bool,
) -> Result<u8, String> {
    // In JSON mode audit entries go into the payload, not onto stdout,
    // so the output stays a single parseable document.
    let memory_audit = Arc::new(MemoryAudit::new());
    let audit: Box<dyn AuditSink> = if json {
        Box::new(Arc::clone(&memory_audit))
    } else {
        Box::new(StdoutAudit)
    };

    let gateway = Gateway::new(
        Box::new(devices.trust),
        Box::new(MockSignal::new(devices.arrival_seconds)),
        Box::new(MockHardware::returning(devices.outcome)),
        audit,
        *policy,
    );
    let cmd = SetCommand::new(credential, direction);

    match gateway.set(&cmd) {
        Ok(()) => {
            if json {
                let payload = serde_json::json!({
                    "result": "success",
                    "direction": direction,
                    "audit": memory_audit.records(),
                });
                println!("{}", json_pretty(&payload)?);
            } else {
                println!("{}", render_ok("Successfully set the switch"));
            }
            Ok(EXIT_SUCCESS)
        }
        Err(failure) => {
            if json {
                let payload = serde_json::json!({
                    "result": "failure",
                    "failure": failure,
                    "message": failure.to_string(),
                });
                println!("{}", json_pretty(&payload)?);
            } else {
                println!(
                    "{}",
                    render_refused(&format!("Error set the switch: {failure}"))
                );
            }
            Ok(EXIT_FAILURE)
        }
    }
}
