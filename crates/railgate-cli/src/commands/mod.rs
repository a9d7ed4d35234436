pub mod check;
pub mod completions;
pub mod set;
pub mod verify;

use railgate_devices::AuditSink;
use railgate_schema::SwitchDirection;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn render_ok(msg: &str) -> String {
    console::Style::new().green().apply_to(msg).to_string()
}

pub fn render_refused(msg: &str) -> String {
    console::Style::new().red().apply_to(msg).to_string()
}

/// Audit adapter writing entries to stdout, one line per set switch.
pub struct StdoutAudit;

impl AuditSink for StdoutAudit {
    fn record(&self, operator: &str, direction: SwitchDirection) {
        println!("Audit: {operator} has set the switch direction to {direction}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(EXIT_SUCCESS, EXIT_FAILURE);
    }

    #[test]
    fn json_pretty_serializes() {
        let val = serde_json::json!({"result": "success"});
        let out = json_pretty(&val).unwrap();
        assert!(out.contains("\"result\""));
    }

    #[test]
    fn render_helpers_keep_the_message() {
        assert!(render_ok("done").contains("done"));
        assert!(render_refused("refused").contains("refused"));
    }
}
