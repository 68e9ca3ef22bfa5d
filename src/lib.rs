pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod panel;
pub mod services;
