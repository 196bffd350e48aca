pub mod crud;
pub mod fixture;
pub mod generator;
pub mod model;
