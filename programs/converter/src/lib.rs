use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("4znS3pCaXR7ErUnnFe8PNzu7YmVNLbXZM6Ucz2FbHMt");

#[program]
pub mod converter {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, fee_bps)
    }

    pub fn convert(
        ctx: Context<Convert>,
        receiver: Pubkey,
        amount: u64,
        compound: bool,
    ) -> Result<()> {
        instructions::convert::handler(ctx, receiver, amount, compound)
    }

    pub fn set_fee(ctx: Context<SetFee>, new_fee_bps: u16) -> Result<()> {
        instructions::set_fee::handler(ctx, new_fee_bps)
    }

    pub fn set_fee_recipient(ctx: Context<SetFeeRecipient>, new_recipient: Pubkey) -> Result<()> {
        instructions::set_fee_recipient::handler(ctx, new_recipient)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

    #[test]
    fn test_mul_bps() {
        assert_eq!(mul_bps(1_000_000, 500).unwrap(), 50_000);
        assert_eq!(mul_bps(2_500_000, 9_999).unwrap(), 2_499_750);
        let expected = ((u64::MAX as u128) * 9_999 / 10_000) as u64;
        assert_eq!(mul_bps(u64::MAX, 9_999).unwrap(), expected);
    }

    #[test]
    fn test_split_fee_one_sol_at_ten_bps() {
        let (net, fee) = split_fee(LAMPORTS_PER_SOL, 10).unwrap();
        assert_eq!(net, 999_000_000);
        assert_eq!(fee, 1_000_000);
    }

    #[test]
    fn test_split_fee_conserves_amount() {
        for amount in [1, 3, 999, LAMPORTS_PER_SOL, LAMPORTS_PER_SOL + 7, u64::MAX] {
            for bps in [0, 1, 10, 500, 9_999] {
                let (net, fee) = split_fee(amount, bps).unwrap();
                assert_eq!(net + fee, amount);
                assert!(fee <= amount);
            }
        }
    }

    #[test]
    fn test_split_fee_floors_toward_net() {
        // 1 lamport at 99.99% still rounds the fee down to zero.
        let (net, fee) = split_fee(1, 9_999).unwrap();
        assert_eq!(net, 1);
        assert_eq!(fee, 0);
    }

    #[test]
    fn test_split_fee_zero_rate() {
        let (net, fee) = split_fee(LAMPORTS_PER_SOL, 0).unwrap();
        assert_eq!(net, LAMPORTS_PER_SOL);
        assert_eq!(fee, 0);
    }
}
