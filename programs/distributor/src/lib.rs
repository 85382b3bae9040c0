#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("2T3AsDRbQdpLWaxEU5vbFXuzRHQnq7JT3wCQCmvdiKmJ");

pub mod state;
pub mod instructions;
pub mod errors;

use instructions::*;

#[program]
pub mod distributor {
    use super::*;

    /// Create the distributor singleton; its account doubles as the treasury
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Accept a payment and forward an authorized asset creation to the minter
    ///
    /// # Arguments
    /// * `id` - identity seed for the new asset
    /// * `name` / `symbol` / `uri` - metadata forwarded to the minter
    /// * `amount` - payment in lamports, must meet the minimum
    pub fn invoke_mint(
        ctx: Context<InvokeMint>,
        id: u64,
        name: String,
        symbol: String,
        uri: String,
        amount: u64,
    ) -> Result<()> {
        instructions::invoke_mint::invoke_mint(ctx, id, name, symbol, uri, amount)
    }
}
