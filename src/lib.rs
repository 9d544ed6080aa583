pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod services;
pub mod store;
