use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn mul_bps(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// Splits `amount` into `(net, fee)`. The fee is floored, so the two parts
/// always sum back to `amount` exactly.
pub fn split_fee(amount: u64, fee_bps: u16) -> Result<(u64, u64)> {
    let fee = mul_bps(amount, fee_bps as u64)?;
    let net = amount
        .checked_sub(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok((net, fee))
}
