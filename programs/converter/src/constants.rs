pub const BPS_DENOM: u64 = 10_000;
