use railgate_schema::CredentialRef;
use std::sync::Arc;

/// Certificate-trust capability backing operator verification.
///
/// Each method answers one check about the referenced credential; none of
/// them fail. Chain validation, CRL transport, and parsing all live behind
/// this trait. The verifier decides the priority in which the answers are
/// consulted.
pub trait CredentialTrust: Send + Sync {
    /// Whether the revocation list for this credential could be reached.
    fn can_check_revocation(&self, credential: &CredentialRef) -> bool;

    fn is_expired(&self, credential: &CredentialRef) -> bool;

    fn is_not_yet_valid(&self, credential: &CredentialRef) -> bool;

    fn is_revoked(&self, credential: &CredentialRef) -> bool;

    /// Whether the credential chains to a trusted root.
    fn is_trusted(&self, credential: &CredentialRef) -> bool;

    /// Subject name embedded in the credential, used to derive the
    /// operator identity. Only meaningful once every check above passed.
    fn subject_name(&self, credential: &CredentialRef) -> String;
}

impl<T: CredentialTrust + ?Sized> CredentialTrust for Arc<T> {
    fn can_check_revocation(&self, credential: &CredentialRef) -> bool {
        (**self).can_check_revocation(credential)
    }

    fn is_expired(&self, credential: &CredentialRef) -> bool {
        (**self).is_expired(credential)
    }

    fn is_not_yet_valid(&self, credential: &CredentialRef) -> bool {
        (**self).is_not_yet_valid(credential)
    }

    fn is_revoked(&self, credential: &CredentialRef) -> bool {
        (**self).is_revoked(credential)
    }

    fn is_trusted(&self, credential: &CredentialRef) -> bool {
        (**self).is_trusted(credential)
    }

    fn subject_name(&self, credential: &CredentialRef) -> String {
        (**self).subject_name(credential)
    }
}
