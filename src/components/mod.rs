pub mod cards;
pub mod template;
