pub mod categories;
pub mod foods;
pub mod units;

pub use foods::FoodFilter;
pub use units::UnitFilter;
