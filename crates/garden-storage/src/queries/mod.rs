pub mod community;
pub mod plant_crud;
pub mod user_ops;
