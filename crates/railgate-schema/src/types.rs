use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction a switch can be thrown to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchDirection {
    Left,
    Right,
}

impl fmt::Display for SwitchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Reference to an operator's signed credential (a file path or an
/// identifier resolvable by the trust adapter). The schema layer does not
/// interpret it; it only carries it to the trust capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialRef(String);

impl CredentialRef {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CredentialRef {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for CredentialRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Operator identity derived from a successfully verified credential.
///
/// Only the verifier produces values of this type; there is no way to
/// obtain one from a credential that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorIdentity {
    pub name: String,
}

impl OperatorIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for OperatorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The single request value the gateway consumes: which credential is
/// asking, and which direction the switch should be thrown to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCommand {
    pub credential: CredentialRef,
    pub direction: SwitchDirection,
}

impl SetCommand {
    pub fn new(credential: impl Into<CredentialRef>, direction: SwitchDirection) -> Self {
        Self {
            credential: credential.into(),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(SwitchDirection::Left.to_string(), "Left");
        assert_eq!(SwitchDirection::Right.to_string(), "Right");
    }

    #[test]
    fn direction_serde_lowercase() {
        let json = serde_json::to_string(&SwitchDirection::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let back: SwitchDirection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SwitchDirection::Right);
    }

    #[test]
    fn credential_ref_from_str() {
        let c = CredentialRef::from("ops/alice.pem");
        assert_eq!(c.as_str(), "ops/alice.pem");
        assert_eq!(c.to_string(), "ops/alice.pem");
    }

    #[test]
    fn set_command_holds_original_direction() {
        let cmd = SetCommand::new("alice.pem", SwitchDirection::Right);
        assert_eq!(cmd.direction, SwitchDirection::Right);
        assert_eq!(cmd.credential.as_str(), "alice.pem");
    }
}
