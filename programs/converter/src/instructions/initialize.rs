use anchor_lang::prelude::*;
use anchor_spl::token::{spl_token, Mint};

use crate::{constants::BPS_DENOM, error::ErrorCode, state::ConverterConfig};

pub fn handler(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
    require!((fee_bps as u64) < BPS_DENOM, ErrorCode::InvalidBps);

    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.fee_recipient = ctx.accounts.owner.key();
    config.fee_bps = fee_bps;
    config.wsol_mint = ctx.accounts.wsol_mint.key();
    config.stake_program = ctx.accounts.stake_program.key();
    config.stake_pool = ctx.accounts.stake_pool.key();
    config.pool_reserve = ctx.accounts.pool_reserve.key();
    config.stake_mint = ctx.accounts.stake_mint.key();
    config.compound_mint = ctx.accounts.compound_mint.key();
    config.bump = ctx.bumps.config;
    config.authority_bump = ctx.bumps.converter_authority;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        init,
        payer = owner,
        seeds = [b"config"],
        bump,
        space = 8 + ConverterConfig::INIT_SPACE,
    )]
    pub config: Account<'info, ConverterConfig>,
    /// CHECK: converter authority PDA; only ever holds lamports while a
    /// conversion is in flight.
    #[account(seeds = [b"converter-authority"], bump)]
    pub converter_authority: UncheckedAccount<'info>,
    #[account(address = spl_token::native_mint::ID @ ErrorCode::InvalidWrappedMint)]
    pub wsol_mint: Account<'info, Mint>,
    /// CHECK: external liquid staking program, recorded for later CPI.
    #[account(executable)]
    pub stake_program: UncheckedAccount<'info>,
    /// CHECK: staking pool state, validated by the staking program.
    pub stake_pool: UncheckedAccount<'info>,
    /// CHECK: the pool's lamport reserve, validated by the staking program.
    pub pool_reserve: UncheckedAccount<'info>,
    pub stake_mint: Account<'info, Mint>,
    pub compound_mint: Account<'info, Mint>,
    pub system_program: Program<'info, System>,
}
