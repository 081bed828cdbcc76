pub mod approved_ongs;
pub mod game_sessions;

pub use approved_ongs as approved_ong_entity;
pub use game_sessions as game_session_entity;
