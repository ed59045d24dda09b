use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};

/// Anchor discriminator of the staking program's `deposit` instruction
/// (sha256("global:deposit")[..8]).
pub const STAKE_DEPOSIT_DISCRIMINATOR: [u8; 8] = [242, 35, 198, 137, 82, 225, 242, 182];

/// Accounts of the staking program's `deposit` instruction, in the order the
/// program expects them.
pub struct StakeDeposit<'info> {
    pub stake_program: AccountInfo<'info>,
    pub stake_pool: AccountInfo<'info>,
    pub pool_reserve: AccountInfo<'info>,
    pub derivative_mint: AccountInfo<'info>,
    pub receiver_token_account: AccountInfo<'info>,
    pub depositor: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

/// Deposits `lamports` from the converter authority into the staking pool,
/// minting the derivative token to `receiver_token_account`. `compound`
/// selects the auto-compounding variant; `derivative_mint` must match the
/// flag, which the staking program enforces.
pub fn deposit(
    accounts: &StakeDeposit<'_>,
    lamports: u64,
    compound: bool,
    authority_bump: u8,
) -> Result<()> {
    let mut data = Vec::with_capacity(17);
    data.extend_from_slice(&STAKE_DEPOSIT_DISCRIMINATOR);
    data.extend_from_slice(&lamports.to_le_bytes());
    data.push(compound as u8);

    let ix = Instruction {
        program_id: *accounts.stake_program.key,
        accounts: vec![
            AccountMeta::new(*accounts.stake_pool.key, false),
            AccountMeta::new(*accounts.pool_reserve.key, false),
            AccountMeta::new(*accounts.derivative_mint.key, false),
            AccountMeta::new(*accounts.receiver_token_account.key, false),
            AccountMeta::new(*accounts.depositor.key, true),
            AccountMeta::new_readonly(*accounts.token_program.key, false),
            AccountMeta::new_readonly(*accounts.system_program.key, false),
        ],
        data,
    };

    let seeds: &[&[u8]] = &[b"converter-authority", &[authority_bump]];
    invoke_signed(
        &ix,
        &[
            accounts.stake_pool.clone(),
            accounts.pool_reserve.clone(),
            accounts.derivative_mint.clone(),
            accounts.receiver_token_account.clone(),
            accounts.depositor.clone(),
            accounts.token_program.clone(),
            accounts.system_program.clone(),
        ],
        &[seeds],
    )?;

    Ok(())
}
