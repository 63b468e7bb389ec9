pub mod date;
pub mod observer;
pub mod scroll;
