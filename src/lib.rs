pub mod config;
pub mod db;
pub mod modules;
pub mod services;
