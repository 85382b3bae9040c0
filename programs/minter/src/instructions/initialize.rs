use anchor_lang::prelude::*;
use crate::state::*;

/// Register the distributor authority allowed to invoke asset creation
pub fn initialize(
    ctx: Context<Initialize>,
    distributor_authority: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.admin = ctx.accounts.admin.key();
    config.distributor_authority = distributor_authority;
    config.assets_created = 0;
    config.bump = ctx.bumps.config;

    msg!(
        "Minter initialized, distributor authority: {}",
        distributor_authority
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin paying for and owning the configuration
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Minter config singleton PDA
    #[account(
        init,
        payer = admin,
        space = MinterConfig::LEN,
        seeds = [MinterConfig::SEED_PREFIX],
        bump
    )]
    pub config: Account<'info, MinterConfig>,

    /// System program
    pub system_program: Program<'info, System>,
}
