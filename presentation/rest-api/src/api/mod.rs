pub mod category;
pub mod error;
pub mod health;
pub mod product;
pub mod tags;
