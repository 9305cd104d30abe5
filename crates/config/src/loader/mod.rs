//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Validate the resulting configuration (base URL shape, timeout bounds).
//!
//! Does NOT handle:
//! - Persisting configuration back to disk (no persisted state in scope).
//! - Attaching credentials to requests (see client crate).
//!
//! Invariants:
//! - Environment variables take precedence over programmatic defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
