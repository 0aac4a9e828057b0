pub mod dashboard;
pub mod inventory;
pub mod leftover;
pub mod recipe;
