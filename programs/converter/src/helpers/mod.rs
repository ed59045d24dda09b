pub mod access;
pub mod math;
pub mod staking;

pub use access::*;
pub use math::*;
pub use staking::*;
