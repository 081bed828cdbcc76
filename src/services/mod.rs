pub mod draw_service;
pub mod game_service;
pub mod ong_service;

pub use draw_service::DrawService;
pub use game_service::GameService;
pub use ong_service::OngService;
