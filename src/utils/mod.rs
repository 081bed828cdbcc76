pub mod numbers;
pub mod time;

pub use numbers::{dedup_sorted, parse_selected_number};
pub use time::epoch_millis;
