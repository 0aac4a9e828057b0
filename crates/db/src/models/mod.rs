pub mod inventory;
pub mod leftover;
pub mod recipe;
