use anchor_lang::prelude::*;
use crate::state::*;

/// Create the distributor singleton. Init-once: a second call fails because
/// the PDA already exists.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let treasury = ctx.accounts.distributor.key();

    let distributor = &mut ctx.accounts.distributor;
    distributor.admin = ctx.accounts.admin.key();
    distributor.total_collected = 0;
    distributor.mints_authorized = 0;
    distributor.bump = ctx.bumps.distributor;

    msg!(
        "Distributor initialized by {}, treasury: {}",
        distributor.admin,
        treasury
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin paying for and owning the configuration
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Distributor singleton PDA, also the treasury
    #[account(
        init,
        payer = admin,
        space = Distributor::LEN,
        seeds = [Distributor::SEED_PREFIX],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// System program
    pub system_program: Program<'info, System>,
}
