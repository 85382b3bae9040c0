use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::mpl_token_metadata::types::{Creator, DataV2};
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3, CreateMasterEditionV3,
    CreateMetadataAccountsV3, Metadata,
};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use crate::state::*;
use crate::errors::*;

/// Create a one-of-one asset for an identity seed: mint exactly one unit,
/// write the metadata record and finalize the supply.
/// This is only reachable via CPI from the distributor program - the
/// `distributor_authority` signature cannot be forged by a direct caller.
pub fn create_asset(
    ctx: Context<CreateAsset>,
    id: u64,
    name: String,
    symbol: String,
    uri: String,
) -> Result<()> {
    MinterConfig::validate_metadata(&name, &symbol, &uri)?;

    let authority_bump = ctx.bumps.mint_authority;
    let authority_seeds = &[
        MinterConfig::MINT_AUTHORITY_SEED_PREFIX,
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    // Exactly one unit, into the payer's token account
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.token_account.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: ctx.accounts.asset_metadata.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.mint_authority.to_account_info(),
                payer: ctx.accounts.payer.to_account_info(),
                update_authority: ctx.accounts.mint_authority.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        DataV2 {
            name,
            symbol,
            uri,
            seller_fee_basis_points: MinterConfig::ROYALTY_BPS,
            creators: Some(vec![Creator {
                address: ctx.accounts.mint_authority.key(),
                verified: true,
                share: 100,
            }]),
            collection: None,
            uses: None,
        },
        true,
        true,
        None,
    )?;

    // Master edition with max_supply 0 finalizes the supply at one unit;
    // no further minting authority is retained anywhere
    create_master_edition_v3(
        CpiContext::new_with_signer(
            ctx.accounts.metadata_program.to_account_info(),
            CreateMasterEditionV3 {
                edition: ctx.accounts.master_edition.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                update_authority: ctx.accounts.mint_authority.to_account_info(),
                mint_authority: ctx.accounts.mint_authority.to_account_info(),
                payer: ctx.accounts.payer.to_account_info(),
                metadata: ctx.accounts.asset_metadata.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        Some(0),
    )?;

    let config = &mut ctx.accounts.config;
    config.assets_created = config
        .assets_created
        .checked_add(1)
        .ok_or(MinterError::NumericalOverflow)?;

    msg!(
        "Asset created for id: {}, total created: {}",
        id,
        config.assets_created
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct CreateAsset<'info> {
    /// Minter config PDA
    #[account(
        mut,
        seeds = [MinterConfig::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, MinterConfig>,

    /// Capability proving the invocation passed through the distributor.
    /// Evaluated before any account below is allocated; a direct caller can
    /// neither forge the PDA signature nor substitute its own key.
    /// CHECK: signature and key checked against the registered authority
    #[account(
        constraint = distributor_authority.is_signer @ MinterError::Unauthorized,
        constraint = config.is_authorized(&distributor_authority.key())
            @ MinterError::Unauthorized,
    )]
    pub distributor_authority: UncheckedAccount<'info>,

    /// The payer funding account creation and receiving the asset
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Asset mint PDA, one per identity seed; re-using a seed fails here
    #[account(
        init,
        payer = payer,
        mint::decimals = 0,
        mint::authority = mint_authority,
        mint::freeze_authority = mint_authority,
        seeds = [MinterConfig::MINT_SEED_PREFIX, id.to_le_bytes().as_ref()],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    /// Mint authority PDA, signs the token and metadata CPIs
    /// CHECK: PDA derived from a fixed seed
    #[account(
        seeds = [MinterConfig::MINT_AUTHORITY_SEED_PREFIX],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// Payer's token account for the minted unit (ATA)
    /// Will be created if it doesn't exist
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = payer,
    )]
    pub token_account: Account<'info, TokenAccount>,

    /// Metadata record at the registry's standard derivation
    /// CHECK: Created and validated by the token metadata program
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
    /// CHECK: Created and validated by the token metadata program
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
