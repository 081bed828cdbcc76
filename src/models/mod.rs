pub mod contract;
pub mod game;
pub mod ong;

pub use contract::*;
pub use game::*;
pub use ong::*;
