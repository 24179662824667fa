// =============================================================================
// State Module - NFT Staking
// =============================================================================

pub mod stake_account;
pub mod stake_config;
pub mod user_account;

pub use stake_account::*;
pub use stake_config::*;
pub use user_account::*;
