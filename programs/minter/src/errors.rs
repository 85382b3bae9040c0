use anchor_lang::prelude::*;

#[error_code]
pub enum MinterError {
    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("metadata too large")]
    MetadataTooLarge,

    #[msg("numerical overflow")]
    NumericalOverflow,
}
