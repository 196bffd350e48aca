pub mod analysis;
pub mod crud;
pub mod model;
