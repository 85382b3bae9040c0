#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("FmqUGBhdGHK9iPWbweoBXFBU2BY9g6C5ncfQstbXpDf6");

pub mod state;
pub mod instructions;
pub mod errors;

use instructions::*;

#[program]
pub mod minter {
    use super::*;

    /// Register the distributor authority allowed to invoke asset creation
    ///
    /// # Arguments
    /// * `distributor_authority` - PDA of the distributor program that will
    ///   sign every `create_asset` CPI
    pub fn initialize(
        ctx: Context<Initialize>,
        distributor_authority: Pubkey,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, distributor_authority)
    }

    /// Create a one-of-one asset: mint PDA, metadata record, finalized supply
    /// Only callable via CPI from the distributor program
    ///
    /// # Arguments
    /// * `id` - identity seed; the asset mint address is derived from it
    /// * `name` / `symbol` / `uri` - metadata written to the registry
    pub fn create_asset(
        ctx: Context<CreateAsset>,
        id: u64,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::create_asset::create_asset(ctx, id, name, symbol, uri)
    }
}
