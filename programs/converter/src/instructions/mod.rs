pub mod convert;
pub mod initialize;
pub mod set_fee;
pub mod set_fee_recipient;
pub mod transfer_ownership;

pub use convert::*;
pub use initialize::*;
pub use set_fee::*;
pub use set_fee_recipient::*;
pub use transfer_ownership::*;
