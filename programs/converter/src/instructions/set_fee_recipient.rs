use anchor_lang::prelude::*;

use crate::{helpers::require_owner, state::ConverterConfig};

pub fn handler(ctx: Context<SetFeeRecipient>, new_recipient: Pubkey) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.config)?;

    ctx.accounts.config.fee_recipient = new_recipient;

    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeRecipient<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, ConverterConfig>,
}
