use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid wrapped SOL mint")]
    InvalidWrappedMint,
    #[msg("Invalid staking program account")]
    InvalidStakeProgram,
    #[msg("Missing fee recipient token account")]
    MissingFeeTokenAccount,
}
