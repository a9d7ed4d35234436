use railgate_schema::SwitchDirection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One audit entry: who set the switch, and to which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub operator: String,
    pub direction: SwitchDirection,
}

/// Audit capability. Fire-and-forget from the core's perspective; the
/// sink must not fail and must not block the pipeline.
pub trait AuditSink: Send + Sync {
    fn record(&self, operator: &str, direction: SwitchDirection);
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn record(&self, operator: &str, direction: SwitchDirection) {
        (**self).record(operator, direction);
    }
}
