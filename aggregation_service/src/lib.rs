pub mod align;
pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod state;
pub mod stats;
