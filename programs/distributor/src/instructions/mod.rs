pub mod initialize;
pub mod invoke_mint;

pub use initialize::*;
pub use invoke_mint::*;
