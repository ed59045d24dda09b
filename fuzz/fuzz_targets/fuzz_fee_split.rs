#![no_main]

use arbitrary::Arbitrary;
use converter::helpers::split_fee;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FeeSplitInput {
    amount: u64,
    fee_bps: u16,
}

fuzz_target!(|input: FeeSplitInput| {
    // Fee rates at or above 100% are rejected at the instruction boundary,
    // so constrain the rate to the legal range.
    let fee_bps = input.fee_bps % 10_000;

    let (net, fee) = split_fee(input.amount, fee_bps).unwrap();

    // Value conservation: the split never creates or destroys lamports.
    assert_eq!(net.checked_add(fee), Some(input.amount));
    assert!(fee <= input.amount);
    if fee_bps == 0 {
        assert_eq!(fee, 0);
    }
});
