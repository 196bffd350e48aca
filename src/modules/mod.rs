pub mod account;
pub mod actions;
pub mod application;
pub mod match_pool;
pub mod profile;
