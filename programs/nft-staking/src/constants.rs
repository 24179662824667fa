// =============================================================================
// NFT Staking Constants
// =============================================================================

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for the global config PDA
/// Full seed: ["config"]
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for the reward token mint PDA
/// Full seed: ["rewards_mint", config_pubkey]
pub const REWARDS_MINT_SEED: &[u8] = b"rewards_mint";

/// Seed for the per-user ledger PDA
/// Full seed: ["user", owner_pubkey]
pub const USER_SEED: &[u8] = b"user";

/// Seed for the per-NFT stake record PDA
/// Full seed: ["stake", nft_mint_pubkey, config_pubkey]
/// Keyed by mint so at most one live stake exists per NFT
pub const STAKE_SEED: &[u8] = b"stake";

// =============================================================================
// TIME
// =============================================================================

/// Points accrue per full day staked; partial days earn nothing
pub const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// REWARD TOKEN
// =============================================================================

/// Reward token uses 6 decimal places
pub const REWARD_DECIMALS: u8 = 6;

/// One point redeems for one whole reward token
/// 1 point = 10^6 base units (6 decimals)
pub const REWARD_UNITS_PER_POINT: u64 = 1_000_000;
