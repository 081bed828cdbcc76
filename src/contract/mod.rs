pub mod lottery;

pub use lottery::{DrawSettlement, MockLotteryContract};
