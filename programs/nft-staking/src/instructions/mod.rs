// =============================================================================
// Instructions Module - NFT Staking
// =============================================================================

pub mod claim;
pub mod initialize_config;
pub mod initialize_user;
pub mod stake;
pub mod unstake;

pub use claim::*;
pub use initialize_config::*;
pub use initialize_user::*;
pub use stake::*;
pub use unstake::*;
