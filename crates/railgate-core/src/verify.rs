use railgate_devices::CredentialTrust;
use railgate_schema::{CredentialRef, OperatorIdentity, ValidationOutcome};
use tracing::debug;

/// Resolve a credential to an operator identity, or to the reason it was
/// refused.
///
/// The checks short-circuit on the first match, in fixed priority: an
/// unreachable revocation list outranks everything (revocation status is
/// unknowable, so no other answer can be relied on), then expiry, then
/// prematurity, then revocation, then chain trust. Only a credential that
/// passes all five yields an identity, derived from the subject name.
pub fn verify_operator(
    trust: &dyn CredentialTrust,
    credential: &CredentialRef,
) -> ValidationOutcome {
    debug!("verifying credential {credential}");
    if !trust.can_check_revocation(credential) {
        return ValidationOutcome::CrlUnreachable;
    }
    if trust.is_expired(credential) {
        return ValidationOutcome::Expired;
    }
    if trust.is_not_yet_valid(credential) {
        return ValidationOutcome::NotYetValid;
    }
    if trust.is_revoked(credential) {
        return ValidationOutcome::Revoked;
    }
    if !trust.is_trusted(credential) {
        return ValidationOutcome::NotTrusted;
    }
    ValidationOutcome::Valid(OperatorIdentity::new(trust.subject_name(credential)))
}
