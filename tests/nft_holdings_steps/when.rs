//! When steps for NFT holdings scenarios.

use super::world::HoldingsWorld;
use rstest_bdd_macros::when;

#[when(r#"holdings are requested for "{wallet}""#)]
fn holdings_requested(world: &mut HoldingsWorld, wallet: String) {
    world.request(&format!("/nft-holdings?walletAddress={wallet}"));
}

#[when("holdings are requested without a wallet address")]
fn holdings_requested_without_wallet(world: &mut HoldingsWorld) {
    world.request("/nft-holdings");
}
