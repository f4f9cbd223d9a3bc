//! Hoja de Vida - network equipment lifecycle registry
//!
//! A REST JSON server for registering switches, firewalls, routers and access
//! points with their lifecycle sheets, searching them and keeping their
//! maintenance logs.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
