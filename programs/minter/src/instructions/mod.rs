pub mod initialize;
pub mod create_asset;

pub use initialize::*;
pub use create_asset::*;
