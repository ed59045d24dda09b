use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ConverterConfig {
    pub owner: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_bps: u16,
    pub wsol_mint: Pubkey,
    pub stake_program: Pubkey,
    pub stake_pool: Pubkey,
    pub pool_reserve: Pubkey,
    pub stake_mint: Pubkey,
    pub compound_mint: Pubkey,
    pub bump: u8,
    pub authority_bump: u8,
}
