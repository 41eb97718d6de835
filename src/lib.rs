pub mod api;
pub mod config;
pub mod datetime;
pub mod error;
pub mod firebase;
pub mod models;
pub mod services;
pub mod state;
