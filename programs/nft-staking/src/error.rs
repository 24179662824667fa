use anchor_lang::prelude::*;

#[error_code]
pub enum StakeError {
    // Configuration Errors
    #[msg("Invalid configuration: all parameters must be greater than zero")]
    InvalidConfiguration,

    // NFT Validation Errors
    #[msg("Incorrect mint")]
    IncorrectMint,

    #[msg("Incorrect collection")]
    IncorrectCollection,

    #[msg("Collection not verified")]
    CollectionNotVerified,

    // Staking Limit Errors
    #[msg("Maximum concurrent stakes reached")]
    MaxStakeReached,

    #[msg("Unstake delay not met: freeze period still active")]
    UnstakeDelayNotMet,

    // Authorization Errors
    #[msg("Unauthorized: signer is not the stake owner")]
    Unauthorized,

    // Claim Errors
    #[msg("No points to claim")]
    NoPointsToClaim,

    // Math Errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
