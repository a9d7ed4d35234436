use super::{json_pretty, render_ok, render_refused, EXIT_FAILURE, EXIT_SUCCESS};
use railgate_core::verify_operator;
use railgate_devices::mock::MockTrust;
use railgate_schema::CredentialRef;

pub fn run(credential: &str, trust: &MockTrust, json: bool) -> Result<u8, String> {
    let outcome = verify_operator(trust, &CredentialRef::from(credential));

    if json {
        println!("{}", json_pretty(&outcome)?);
    } else if outcome.is_valid() {
        println!("{}", render_ok(&outcome.to_string()));
    } else {
        println!("{}", render_refused(&outcome.to_string()));
    }

    Ok(if outcome.is_valid() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
