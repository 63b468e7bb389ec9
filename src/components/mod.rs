pub mod cards;
pub mod nav;
pub mod reveal_section;
