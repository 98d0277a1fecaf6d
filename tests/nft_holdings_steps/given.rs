//! Given steps for NFT holdings scenarios.

use super::world::HoldingsWorld;
use addy::nft::domain::{Address, Uint256};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"wallet "{wallet}" owns token {token_id:u64} at "{uri}""#)]
fn wallet_owns_token(
    world: &mut HoldingsWorld,
    wallet: String,
    token_id: u64,
    uri: String,
) -> Result<(), eyre::Report> {
    let owner = Address::parse(&wallet).wrap_err("parse wallet address")?;
    world
        .chain
        .mint(&owner, Uint256::from_u64(token_id), uri)
        .wrap_err("mint token")
}

#[given(r#"metadata for "{uri}" is published with name "{name}""#)]
fn metadata_published(
    world: &mut HoldingsWorld,
    uri: String,
    name: String,
) -> Result<(), eyre::Report> {
    world
        .metadata
        .publish(uri, json!({"name": name, "attributes": []}))
        .wrap_err("publish metadata")
}
