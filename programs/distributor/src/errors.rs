use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    #[msg("distributor uninitialized")]
    Uninitialized,

    #[msg("insufficient amount")]
    InsufficientAmount,

    #[msg("transfer failed")]
    TransferFailed,

    #[msg("identity seed already used")]
    DuplicateIdentity,

    #[msg("numerical overflow")]
    NumericalOverflow,
}

// Automated clients match on the literal message strings, not error codes.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_tokens_are_stable() {
        assert_eq!(
            DistributorError::Uninitialized.to_string(),
            "distributor uninitialized"
        );
        assert_eq!(
            DistributorError::InsufficientAmount.to_string(),
            "insufficient amount"
        );
        assert_eq!(DistributorError::TransferFailed.to_string(), "transfer failed");
        assert_eq!(
            DistributorError::DuplicateIdentity.to_string(),
            "identity seed already used"
        );
    }
}
