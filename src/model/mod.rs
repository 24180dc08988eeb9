pub mod game;
pub mod ids;
