//! Personal watchlist API: users keep a list of movies and TV shows to watch.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod validation;

pub use error::{AppError, AppResult};
