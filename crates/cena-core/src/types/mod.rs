mod counts;
mod ids;
mod name;

pub use counts::{Covers, Servings};
pub use ids::{IngredientId, RecipeId};
pub use name::Name;
