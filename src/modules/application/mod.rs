pub mod crud;
pub mod generator;
pub mod model;
pub mod schema;
