use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    helpers::{
        split_fee,
        staking::{self, StakeDeposit},
    },
    state::ConverterConfig,
};

pub fn handler(
    ctx: Context<Convert>,
    receiver: Pubkey,
    amount: u64,
    compound: bool,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let config = &ctx.accounts.config;
    let fee_recipient = config.fee_recipient;
    let authority_bump = config.authority_bump;

    // The receiver takes the plain or compounding derivative per the flag;
    // the fee share is always issued in the compounding form.
    let receiver_mint = if compound {
        config.compound_mint
    } else {
        config.stake_mint
    };
    require_keys_eq!(
        ctx.accounts.receiver_token_account.mint,
        receiver_mint,
        ErrorCode::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.receiver_token_account.owner,
        receiver,
        ErrorCode::InvalidTokenAccount
    );

    // All accounting is fixed before the first call that hands control to
    // another program.
    let (net_amount, fee_amount) = split_fee(amount, config.fee_bps)?;
    let vault_rent = Rent::get()?.minimum_balance(TokenAccount::LEN);

    // The fee recipient's account is only needed when a fee is actually due;
    // zero-fee deployments may omit it.
    if fee_amount > 0 {
        let fee_token_account = ctx
            .accounts
            .fee_token_account
            .as_ref()
            .ok_or_else(|| error!(ErrorCode::MissingFeeTokenAccount))?;
        require_keys_eq!(
            fee_token_account.mint,
            config.compound_mint,
            ErrorCode::InvalidTokenAccount
        );
        require_keys_eq!(
            fee_token_account.owner,
            fee_recipient,
            ErrorCode::InvalidTokenAccount
        );
    }

    let seeds: &[&[u8]] = &[b"converter-authority", &[authority_bump]];
    let signer = &[seeds];

    // Pull the wrapped SOL into the per-call unwrap vault, then close the
    // vault to redeem its lamports to the converter authority.
    token::transfer(ctx.accounts.pull_ctx(), amount)?;
    token::close_account(ctx.accounts.unwrap_ctx().with_signer(signer))?;

    // Fee deposit first, net deposit second. A zero fee issues no deposit.
    if fee_amount > 0 {
        staking::deposit(
            &ctx.accounts.fee_deposit_accounts()?,
            fee_amount,
            true,
            authority_bump,
        )?;
    }
    staking::deposit(
        &ctx.accounts.net_deposit_accounts(compound),
        net_amount,
        compound,
        authority_bump,
    )?;

    // The caller fronted the unwrap vault rent; hand it back so the authority
    // ends the call holding nothing.
    system_program::transfer(ctx.accounts.refund_ctx().with_signer(signer), vault_rent)?;

    msg!(
        "converted {} wrapped SOL from {}: net {} to {} (compound: {}), fee {} to {}",
        amount,
        ctx.accounts.caller.key(),
        net_amount,
        receiver,
        compound,
        fee_amount,
        fee_recipient
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Convert<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,
    #[account(
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, ConverterConfig>,
    /// CHECK: converter authority PDA; receives the unwrapped lamports and
    /// disburses them within this instruction.
    #[account(mut, seeds = [b"converter-authority"], bump = config.authority_bump)]
    pub converter_authority: UncheckedAccount<'info>,
    #[account(address = config.wsol_mint @ ErrorCode::InvalidWrappedMint)]
    pub wsol_mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = caller_wsol_account.mint == config.wsol_mint @ ErrorCode::InvalidTokenAccount,
        constraint = caller_wsol_account.owner == caller.key() @ ErrorCode::Unauthorized,
    )]
    pub caller_wsol_account: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = caller,
        seeds = [b"unwrap-vault", caller.key().as_ref()],
        bump,
        token::mint = wsol_mint,
        token::authority = converter_authority,
    )]
    pub unwrap_vault: Account<'info, TokenAccount>,
    /// CHECK: validated against the program recorded at initialization.
    #[account(executable, address = config.stake_program @ ErrorCode::InvalidStakeProgram)]
    pub stake_program: UncheckedAccount<'info>,
    /// CHECK: staking pool state, validated by the staking program.
    #[account(mut, address = config.stake_pool)]
    pub stake_pool: UncheckedAccount<'info>,
    /// CHECK: the pool's lamport reserve, validated by the staking program.
    #[account(mut, address = config.pool_reserve)]
    pub pool_reserve: UncheckedAccount<'info>,
    /// CHECK: plain derivative mint, fixed at initialization.
    #[account(mut, address = config.stake_mint)]
    pub stake_mint: UncheckedAccount<'info>,
    /// CHECK: compounding derivative mint, fixed at initialization.
    #[account(mut, address = config.compound_mint)]
    pub compound_mint: UncheckedAccount<'info>,
    #[account(mut)]
    pub receiver_token_account: Account<'info, TokenAccount>,
    #[account(mut)]
    pub fee_token_account: Option<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Convert<'info> {
    fn pull_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.caller_wsol_account.to_account_info(),
            to: self.unwrap_vault.to_account_info(),
            authority: self.caller.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn unwrap_ctx(&self) -> CpiContext<'_, '_, '_, 'info, CloseAccount<'info>> {
        let cpi_accounts = CloseAccount {
            account: self.unwrap_vault.to_account_info(),
            destination: self.converter_authority.to_account_info(),
            authority: self.converter_authority.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn refund_ctx(&self) -> CpiContext<'_, '_, '_, 'info, system_program::Transfer<'info>> {
        let cpi_accounts = system_program::Transfer {
            from: self.converter_authority.to_account_info(),
            to: self.caller.to_account_info(),
        };
        CpiContext::new(self.system_program.to_account_info(), cpi_accounts)
    }

    fn fee_deposit_accounts(&self) -> Result<StakeDeposit<'info>> {
        let fee_token_account = self
            .fee_token_account
            .as_ref()
            .ok_or_else(|| error!(ErrorCode::MissingFeeTokenAccount))?;
        Ok(StakeDeposit {
            stake_program: self.stake_program.to_account_info(),
            stake_pool: self.stake_pool.to_account_info(),
            pool_reserve: self.pool_reserve.to_account_info(),
            derivative_mint: self.compound_mint.to_account_info(),
            receiver_token_account: fee_token_account.to_account_info(),
            depositor: self.converter_authority.to_account_info(),
            token_program: self.token_program.to_account_info(),
            system_program: self.system_program.to_account_info(),
        })
    }

    fn net_deposit_accounts(&self, compound: bool) -> StakeDeposit<'info> {
        let derivative_mint = if compound {
            self.compound_mint.to_account_info()
        } else {
            self.stake_mint.to_account_info()
        };
        StakeDeposit {
            stake_program: self.stake_program.to_account_info(),
            stake_pool: self.stake_pool.to_account_info(),
            pool_reserve: self.pool_reserve.to_account_info(),
            derivative_mint,
            receiver_token_account: self.receiver_token_account.to_account_info(),
            depositor: self.converter_authority.to_account_info(),
            token_program: self.token_program.to_account_info(),
            system_program: self.system_program.to_account_info(),
        }
    }
}
