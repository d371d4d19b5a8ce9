//! Error types for the hanabi game core.
//!
//! This module provides the error handling system for the game, with specialized error
//! types for different domains (gameplay rules, authorization, catalog records,
//! configuration). All errors use `thiserror` for ergonomic definitions with automatic
//! `Display` and `Error` trait implementations, and aggregate into a single [`Error`]
//! type so service methods can return one error surface to the caller.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod game;

use thiserror::Error;

use crate::error::{
    auth::AuthError, catalog::CatalogError, config::ConfigError, game::GameError,
};

/// Main error type for the hanabi game core.
///
/// This enum aggregates all domain-specific error types and external library errors into
/// a single unified error type. It uses `thiserror`'s `#[from]` attribute to enable
/// automatic conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authorization errors (caller lacks admin rights)
/// - Gameplay errors (insufficient currency, cooldowns, missing participants)
/// - Catalog errors (missing or malformed JSON records)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authorization error (caller is not an admin).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Gameplay rule violation (balances, cooldowns, eligibility).
    #[error(transparent)]
    GameError(#[from] GameError),
    /// Catalog error (missing or malformed template/relic record).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
