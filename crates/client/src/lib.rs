//! Malloy Publisher REST API client.
//!
//! This crate provides a type-safe client for interacting with the Malloy
//! Publisher HTTP API (`/api/v0`). It covers the read surface of the service:
//! projects, packages, models, query results, databases, schedules, and
//! database connections.

mod auth;
pub mod client;
pub mod error;
pub mod models;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::MalloyClient;
pub use client::builder::MalloyClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    About, ApiErrorBody, BigqueryConnection, CellType, CompiledModel, Connection, ConnectionType,
    Database, Model, ModelQuery, ModelSource, ModelType, ModelView, NotebookCell, Package,
    PostgresConnection, Project, QueryParams, QueryResult, Schedule, SnowflakeConnection,
    TrinoConnection,
};
