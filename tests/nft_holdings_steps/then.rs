//! Then steps for NFT holdings scenarios.

use super::world::{CONTRACT, EXPLORER, HoldingsWorld};
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {status:u16}")]
fn response_status(world: &mut HoldingsWorld, status: u16) -> Result<(), eyre::Report> {
    let response = world.last_response()?;
    if response.status() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}: {}",
            response.status(),
            response.body_text()
        ));
    }
    Ok(())
}

#[then(r#"the balance is "{balance}""#)]
fn balance_is(world: &mut HoldingsWorld, balance: String) -> Result<(), eyre::Report> {
    let found = world.field("/balance")?;
    if found.as_str() != Some(balance.as_str()) {
        return Err(eyre::eyre!("expected balance {balance}, found {found}"));
    }
    Ok(())
}

#[then(r#"token {token_id:u64} has metadata named "{name}""#)]
fn token_has_metadata(
    world: &mut HoldingsWorld,
    token_id: u64,
    name: String,
) -> Result<(), eyre::Report> {
    let token = world.token(token_id)?;
    let found = token.pointer("/metadata/name").and_then(Value::as_str);
    if found != Some(name.as_str()) {
        return Err(eyre::eyre!("token {token_id} metadata is {token}"));
    }
    Ok(())
}

#[then("token {token_id:u64} has no metadata")]
fn token_has_no_metadata(world: &mut HoldingsWorld, token_id: u64) -> Result<(), eyre::Report> {
    let token = world.token(token_id)?;
    if token.get("metadata") != Some(&Value::Null) {
        return Err(eyre::eyre!("expected null metadata, found {token}"));
    }
    Ok(())
}

#[then("the explorer link points at the contract")]
fn explorer_link(world: &mut HoldingsWorld) -> Result<(), eyre::Report> {
    let expected = format!("{EXPLORER}/{CONTRACT}");
    let found = world.field("/explorerUrl")?;
    if found.as_str() != Some(expected.as_str()) {
        return Err(eyre::eyre!("expected {expected}, found {found}"));
    }
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message(world: &mut HoldingsWorld, message: String) -> Result<(), eyre::Report> {
    let found = world.field("/error")?;
    if found.as_str() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected error {message:?}, found {found}"));
    }
    Ok(())
}
