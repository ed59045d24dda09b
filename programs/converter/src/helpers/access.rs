use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::ConverterConfig};

pub fn require_owner(owner: &Signer<'_>, config: &Account<ConverterConfig>) -> Result<()> {
    require_keys_eq!(owner.key(), config.owner, ErrorCode::Unauthorized);
    Ok(())
}
