use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse policy: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("telemetry threshold must not be negative: {0}")]
    NegativeThreshold(i64),
    #[error("telemetry thresholds must be strictly increasing: {0} >= {1}")]
    NonIncreasingThresholds(i64, i64),
}

/// Telemetry bucketing thresholds, in seconds until the next train.
///
/// The buckets are closed-open and evaluated in order: below
/// `unknown_below` the reading is unusable, below `sensor_failure_below`
/// the sensor produced no data, below `occupied_below` a train is inbound,
/// and anything at or above `occupied_below` means the track is free.
/// These are policy constants, not physical constraints.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TelemetryPolicy {
    #[serde(default = "default_unknown_below")]
    pub unknown_below: i64,
    #[serde(default = "default_sensor_failure_below")]
    pub sensor_failure_below: i64,
    #[serde(default = "default_occupied_below")]
    pub occupied_below: i64,
}

fn default_unknown_below() -> i64 {
    10
}

fn default_sensor_failure_below() -> i64 {
    20
}

fn default_occupied_below() -> i64 {
    30
}

impl Default for TelemetryPolicy {
    fn default() -> Self {
        Self {
            unknown_below: default_unknown_below(),
            sensor_failure_below: default_sensor_failure_below(),
            occupied_below: default_occupied_below(),
        }
    }
}

impl TelemetryPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.unknown_below < 0 {
            return Err(PolicyError::NegativeThreshold(self.unknown_below));
        }
        if self.unknown_below >= self.sensor_failure_below {
            return Err(PolicyError::NonIncreasingThresholds(
                self.unknown_below,
                self.sensor_failure_below,
            ));
        }
        if self.sensor_failure_below >= self.occupied_below {
            return Err(PolicyError::NonIncreasingThresholds(
                self.sensor_failure_below,
                self.occupied_below,
            ));
        }
        Ok(())
    }
}

/// How the gateway composes the operator check and the track check.
///
/// `FailFast` short-circuits on the first failure. `Aggregate` always runs
/// both checks and merges their failures into one aggregated value. The
/// two are never mixed within a single request.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompositionPolicy {
    #[default]
    FailFast,
    Aggregate,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GatewayPolicy {
    #[serde(default)]
    pub composition: CompositionPolicy,
    #[serde(default)]
    pub telemetry: TelemetryPolicy,
}

pub fn parse_policy_str(input: &str) -> Result<GatewayPolicy, PolicyError> {
    let policy: GatewayPolicy = toml::from_str(input)?;
    policy.telemetry.validate()?;
    Ok(policy)
}

pub fn parse_policy_file(path: impl AsRef<Path>) -> Result<GatewayPolicy, PolicyError> {
    let content = fs::read_to_string(path)?;
    parse_policy_str(&content)
}
