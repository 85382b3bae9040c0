use anchor_lang::prelude::*;

/// Minter Config - registers which distributor authority may mint
#[account]
pub struct MinterConfig {
    /// The admin who initialized the minter
    pub admin: Pubkey,

    /// The distributor program's authority PDA; every `create_asset`
    /// invocation must carry this account as a signer
    pub distributor_authority: Pubkey,

    /// Total number of assets created through this minter
    pub assets_created: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl MinterConfig {
    /// Size calculation for account allocation
    /// Discriminator (8) + Pubkey (32) + Pubkey (32) + u64 (8) + u8 (1)
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;

    /// PDA seed prefix for the config singleton
    pub const SEED_PREFIX: &'static [u8] = b"config";

    /// PDA seed prefix for the mint authority
    pub const MINT_AUTHORITY_SEED_PREFIX: &'static [u8] = b"mint_authority";

    /// PDA seed prefix for asset mints, combined with the identity seed
    pub const MINT_SEED_PREFIX: &'static [u8] = b"mint";

    /// Registry limits for the metadata record
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_SYMBOL_LEN: usize = 10;
    pub const MAX_URI_LEN: usize = 200;

    /// Royalty on secondary sales, in basis points
    pub const ROYALTY_BPS: u16 = 500;

    /// True when `presented` is the registered distributor authority
    pub fn is_authorized(&self, presented: &Pubkey) -> bool {
        self.distributor_authority == *presented
    }

    /// Validate metadata fields against the registry limits
    pub fn validate_metadata(name: &str, symbol: &str, uri: &str) -> Result<()> {
        require!(
            name.len() <= Self::MAX_NAME_LEN,
            MinterError::MetadataTooLarge
        );
        require!(
            symbol.len() <= Self::MAX_SYMBOL_LEN,
            MinterError::MetadataTooLarge
        );
        require!(uri.len() <= Self::MAX_URI_LEN, MinterError::MetadataTooLarge);

        Ok(())
    }

    /// Derive the asset mint address for an identity seed
    pub fn asset_identity(id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::MINT_SEED_PREFIX, id.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }
}

use crate::errors::MinterError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_matches_registered_key_only() {
        let registered = Pubkey::new_unique();
        let config = MinterConfig {
            admin: Pubkey::new_unique(),
            distributor_authority: registered,
            assets_created: 0,
            bump: 255,
        };

        assert!(config.is_authorized(&registered));
        for _ in 0..16 {
            assert!(!config.is_authorized(&Pubkey::new_unique()));
        }
        assert!(!config.is_authorized(&Pubkey::default()));
    }

    #[test]
    fn metadata_within_limits_accepted() {
        let cases = [
            ("Cat NFT", "EMB", "https://gateway.irys.xyz/abc"),
            ("", "", ""),
            ("a", "s", "u"),
        ];
        for (name, symbol, uri) in cases {
            assert!(MinterConfig::validate_metadata(name, symbol, uri).is_ok());
        }

        let max_name = "n".repeat(MinterConfig::MAX_NAME_LEN);
        let max_symbol = "s".repeat(MinterConfig::MAX_SYMBOL_LEN);
        let max_uri = "u".repeat(MinterConfig::MAX_URI_LEN);
        assert!(MinterConfig::validate_metadata(&max_name, &max_symbol, &max_uri).is_ok());
    }

    #[test]
    fn oversized_metadata_rejected() {
        let name = "n".repeat(MinterConfig::MAX_NAME_LEN + 1);
        let symbol = "s".repeat(MinterConfig::MAX_SYMBOL_LEN + 1);
        let uri = "u".repeat(MinterConfig::MAX_URI_LEN + 1);

        for (n, s, u) in [
            (name.as_str(), "EMB", "https://x"),
            ("Cat NFT", symbol.as_str(), "https://x"),
            ("Cat NFT", "EMB", uri.as_str()),
        ] {
            let err = MinterConfig::validate_metadata(n, s, u).unwrap_err();
            assert!(err.to_string().contains("metadata too large"));
        }
    }

    #[test]
    fn asset_identity_is_deterministic_per_seed() {
        let (a1, _) = MinterConfig::asset_identity(28);
        let (a2, _) = MinterConfig::asset_identity(28);
        assert_eq!(a1, a2);

        // Distinct seeds must never collide
        let (b, _) = MinterConfig::asset_identity(40);
        assert_ne!(a1, b);

        let mut seen = std::collections::HashSet::new();
        for id in 0..64u64 {
            let (addr, _) = MinterConfig::asset_identity(id);
            assert!(seen.insert(addr));
        }
    }
}
