pub mod category;
pub mod money;
pub mod parsed;

pub use category::{registry, Category, CategoryId, OTHER_ID};
pub use money::{Amount, AmountError};
pub use parsed::{ParseResult, PLACEHOLDER_DESCRIPTION};
