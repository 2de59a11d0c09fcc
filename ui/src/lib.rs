//! # Promptdeck UI Library
//!
//! Application shell for managing text prompts. This library carries the
//! theme subsystem shared by every screen, together with the configuration,
//! logging and error plumbing around it.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Application error types
//! - [`logger`] - Logging configuration
//! - [`theme`] - Theme mode management, persistence and color schemes
//! - [`validation`] - Validation trait shared by validators
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;

pub use error::{AppError, AppResult};

pub use validation::Validator;
