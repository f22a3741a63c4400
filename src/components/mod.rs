pub mod app;
pub mod board;
pub mod controls;
pub mod header;
pub mod hud;
