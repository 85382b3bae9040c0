use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::Metadata;
use anchor_spl::token::Token;
use minter::cpi::accounts::CreateAsset as CreateAssetAccounts;
use minter::cpi::create_asset;
use minter::program::Minter;
use minter::state::MinterConfig;
use crate::state::*;
use crate::errors::*;

/// Accept a payment and forward an authorized asset creation to the minter.
/// Validation order: initialized, amount, identity not yet used, transfer.
/// The first failure aborts the whole transaction, so a later failure in the
/// minter CPI also rolls the payment back.
pub fn invoke_mint(
    ctx: Context<InvokeMint>,
    id: u64,
    name: String,
    symbol: String,
    uri: String,
    amount: u64,
) -> Result<()> {
    require!(
        ctx.accounts.distributor.admin != Pubkey::default(),
        DistributorError::Uninitialized
    );

    Distributor::validate_payment(amount)?;

    // Pre-check so a duplicate seed is rejected before the treasury moves;
    // the minter's account creation is the hard uniqueness backstop
    require!(
        !asset_identity_taken(ctx.accounts.mint.lamports(), ctx.accounts.mint.data_is_empty()),
        DistributorError::DuplicateIdentity
    );

    let transfer_result = transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.distributor.to_account_info(),
            },
        ),
        amount,
    );

    if transfer_result.is_err() {
        return err!(DistributorError::TransferFailed);
    }

    msg!(
        "Payment of {} lamports received from {}",
        amount,
        ctx.accounts.payer.key()
    );

    ctx.accounts.distributor.record_payment(amount)?;

    let authority_bump = ctx.bumps.distributor_authority;
    let authority_seeds = &[Distributor::AUTHORITY_SEED_PREFIX, &[authority_bump]];
    let signer_seeds = &[&authority_seeds[..]];

    create_asset(
        CpiContext::new_with_signer(
            ctx.accounts.minter_program.to_account_info(),
            CreateAssetAccounts {
                config: ctx.accounts.minter_config.to_account_info(),
                distributor_authority: ctx.accounts.distributor_authority.to_account_info(),
                payer: ctx.accounts.payer.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.mint_authority.to_account_info(),
                token_account: ctx.accounts.token_account.to_account_info(),
                asset_metadata: ctx.accounts.asset_metadata.to_account_info(),
                master_edition: ctx.accounts.master_edition.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                associated_token_program: ctx.accounts.associated_token_program.to_account_info(),
                metadata_program: ctx.accounts.metadata_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        id,
        name,
        symbol,
        uri,
    )?;

    msg!(
        "Mint authorized for id: {}, treasury total: {}",
        id,
        ctx.accounts.distributor.total_collected
    );

    Ok(())
}

/// An identity seed is taken once its mint account holds lamports or data
pub fn asset_identity_taken(lamports: u64, data_is_empty: bool) -> bool {
    lamports > 0 || !data_is_empty
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct InvokeMint<'info> {
    /// The payer funding the payment and the asset accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Distributor singleton PDA, receives the payment
    #[account(
        mut,
        seeds = [Distributor::SEED_PREFIX],
        bump = distributor.bump,
    )]
    pub distributor: Account<'info, Distributor>,

    /// Authority PDA presented to the minter as the capability; carries no
    /// data, only the program-derived signature
    /// CHECK: PDA derived from a fixed seed
    #[account(
        seeds = [Distributor::AUTHORITY_SEED_PREFIX],
        bump,
    )]
    pub distributor_authority: UncheckedAccount<'info>,

    /// Minter config PDA
    /// CHECK: Validated by the minter program via CPI
    #[account(mut)]
    pub minter_config: UncheckedAccount<'info>,

    /// Asset mint PDA for `id`; must not exist yet (duplicate pre-check in
    /// the handler, account creation in the minter is the hard backstop)
    /// CHECK: Created and validated by the minter program via CPI
    #[account(
        mut,
        seeds = [MinterConfig::MINT_SEED_PREFIX, id.to_le_bytes().as_ref()],
        bump,
        seeds::program = minter_program.key(),
    )]
    pub mint: UncheckedAccount<'info>,

    /// Minter's mint authority PDA
    /// CHECK: Validated by the minter program via CPI
    pub mint_authority: UncheckedAccount<'info>,

    /// Payer's token account for the minted unit
    /// CHECK: Created and validated by the minter program via CPI
    #[account(mut)]
    pub token_account: UncheckedAccount<'info>,

    /// Metadata record at the registry's standard derivation
    /// CHECK: Validated by the token metadata program via CPI
    #[account(
        mut,
        seeds = [
            b"metadata".as_ref(),
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump,
        seeds::program = metadata_program.key(),
    )]
    pub asset_metadata: UncheckedAccount<'info>,

    /// Supply finalization marker
    /// CHECK: Validated by the token metadata program via CPI
    #[account(
        mut,
        seeds = [
            b"metadata".as_ref(),
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
            b"edition".as_ref(),
        ],
        bump,
        seeds::program = metadata_program.key(),
    )]
    pub master_edition: UncheckedAccount<'info>,

    /// Minter program invoked with the authority capability
    pub minter_program: Program<'info, Minter>,

    /// Token program
    pub token_program: Program<'info, Token>,

    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token metadata program
    pub metadata_program: Program<'info, Metadata>,

    /// System program
    pub system_program: Program<'info, System>,

    /// Rent sysvar
    pub rent: Sysvar<'info, Rent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_identity_accounts_pass_the_duplicate_check() {
        assert!(!asset_identity_taken(0, true));
    }

    #[test]
    fn existing_identity_accounts_are_flagged() {
        // Funded, allocated, or both - any of these means the seed was used
        assert!(asset_identity_taken(1, true));
        assert!(asset_identity_taken(0, false));
        assert!(asset_identity_taken(1_461_600, false));
    }
}
