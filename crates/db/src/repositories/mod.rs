pub mod inventory_repo;
pub mod leftover_repo;
pub mod recipe_repo;

pub use inventory_repo::InventoryRepo;
pub use leftover_repo::LeftoverRepo;
pub use recipe_repo::RecipeRepo;
