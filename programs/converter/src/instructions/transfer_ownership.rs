use anchor_lang::prelude::*;

use crate::{helpers::require_owner, state::ConverterConfig};

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.config)?;

    ctx.accounts.config.owner = new_owner;

    msg!(
        "ownership transferred from {} to {}",
        ctx.accounts.owner.key(),
        new_owner
    );

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, ConverterConfig>,
}
