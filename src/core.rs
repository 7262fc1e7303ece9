pub mod cache;
pub mod price;
pub mod repository;
pub mod window;
pub mod zone;
