//! Dualstore Library
//!
//! Core library modules for the dualstore web application: a CRUD REST
//! backend over two independent relational stores.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
