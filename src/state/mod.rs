pub mod menu;
pub mod reveal;
