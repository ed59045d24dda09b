use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM, error::ErrorCode, helpers::require_owner, state::ConverterConfig,
};

pub fn handler(ctx: Context<SetFee>, new_fee_bps: u16) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.config)?;
    require!((new_fee_bps as u64) < BPS_DENOM, ErrorCode::InvalidBps);

    ctx.accounts.config.fee_bps = new_fee_bps;

    Ok(())
}

#[derive(Accounts)]
pub struct SetFee<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, ConverterConfig>,
}
