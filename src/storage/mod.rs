pub mod foods;
pub mod recipes;

pub use foods::{Food, generate_foods};
pub use recipes::{Recipe, RecipeStore};
