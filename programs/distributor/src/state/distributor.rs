use anchor_lang::prelude::*;

/// Distributor singleton - gatekeeper configuration and treasury in one
/// account. Accepted payments accumulate as lamports on this PDA; nothing
/// in this program ever moves them back out.
#[account]
#[derive(Default)]
pub struct Distributor {
    /// The admin who initialized the distributor
    pub admin: Pubkey,

    /// Sum of every accepted payment, in lamports
    pub total_collected: u64,

    /// Number of asset creations forwarded to the minter
    pub mints_authorized: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Distributor {
    /// Size calculation for account allocation
    /// Discriminator (8) + Pubkey (32) + u64 (8) + u64 (8) + u8 (1)
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;

    /// PDA seed prefix for the singleton
    pub const SEED_PREFIX: &'static [u8] = b"distributor";

    /// PDA seed prefix for the authority that signs minter CPIs
    pub const AUTHORITY_SEED_PREFIX: &'static [u8] = b"authority";

    /// Minimum accepted payment: 0.01 SOL
    pub const MINIMUM_PAYMENT: u64 = 10_000_000;

    /// Reject payments below the minimum
    pub fn validate_payment(amount: u64) -> Result<()> {
        require!(
            amount >= Self::MINIMUM_PAYMENT,
            DistributorError::InsufficientAmount
        );

        Ok(())
    }

    /// Record an accepted payment in the running totals
    pub fn record_payment(&mut self, amount: u64) -> Result<()> {
        self.total_collected = self
            .total_collected
            .checked_add(amount)
            .ok_or(DistributorError::NumericalOverflow)?;

        self.mints_authorized = self
            .mints_authorized
            .checked_add(1)
            .ok_or(DistributorError::NumericalOverflow)?;

        Ok(())
    }

    /// Derive the authority PDA presented to the minter as the capability
    pub fn authority_address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::AUTHORITY_SEED_PREFIX], &crate::ID)
    }
}

use crate::errors::DistributorError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_below_minimum_rejected() {
        // 0.001 SOL is the rejection case automated clients exercise
        for amount in [0, 1, 1_000_000, Distributor::MINIMUM_PAYMENT - 1] {
            let err = Distributor::validate_payment(amount).unwrap_err();
            assert!(err.to_string().contains("insufficient amount"));
        }
    }

    #[test]
    fn payments_at_or_above_minimum_accepted() {
        for amount in [
            Distributor::MINIMUM_PAYMENT,
            Distributor::MINIMUM_PAYMENT + 1,
            1_000_000_000,
            u64::MAX,
        ] {
            assert!(Distributor::validate_payment(amount).is_ok());
        }
    }

    #[test]
    fn treasury_total_is_exact_sum_of_payments() {
        let mut distributor = Distributor::default();

        let payments = [10_000_000u64, 10_000_000, 25_000_000, 999_999_999];
        for amount in payments {
            distributor.record_payment(amount).unwrap();
        }

        assert_eq!(distributor.total_collected, payments.iter().sum::<u64>());
        assert_eq!(distributor.mints_authorized, payments.len() as u64);
    }

    #[test]
    fn treasury_overflow_surfaces_instead_of_wrapping() {
        let mut distributor = Distributor {
            total_collected: u64::MAX - 1,
            ..Distributor::default()
        };

        let err = distributor.record_payment(Distributor::MINIMUM_PAYMENT).unwrap_err();
        assert!(err.to_string().contains("numerical overflow"));
    }

    #[test]
    fn authority_address_is_deterministic() {
        let (a, bump_a) = Distributor::authority_address();
        let (b, bump_b) = Distributor::authority_address();
        assert_eq!(a, b);
        assert_eq!(bump_a, bump_b);

        // The capability must be scoped to this program, not the seed alone
        let foreign = Pubkey::find_program_address(
            &[Distributor::AUTHORITY_SEED_PREFIX],
            &Pubkey::new_unique(),
        );
        assert_ne!(a, foreign.0);
    }
}
