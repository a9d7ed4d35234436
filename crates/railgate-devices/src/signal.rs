use std::sync::Arc;

/// Track telemetry capability.
///
/// A single blocking read of the signal block ahead of the switch,
/// reported as seconds until the next train reaches the segment. The
/// reading is raw; bucketing it into a track status is core policy, not a
/// device concern.
pub trait TrackSignal: Send + Sync {
    fn measure_arrival_seconds(&self) -> i64;
}

impl<T: TrackSignal + ?Sized> TrackSignal for Arc<T> {
    fn measure_arrival_seconds(&self) -> i64 {
        (**self).measure_arrival_seconds()
    }
}
