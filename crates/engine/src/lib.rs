//! Stockwatch Engine library.
//!
//! This crate contains all server-side code for the inventory service.
//!
//! ## Structure
//!
//! - `use_cases/` - Item operations orchestrated over the store port
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests over the HTTP router and a real SQLite store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
pub use config::EngineConfig;
