//! Data models for Malloy Publisher API payloads.
//!
//! This module provides types for deserializing publisher REST API responses.
//! Types are organized by resource in submodules and re-exported here for
//! convenient access. Wire field names are camelCase; unknown fields are
//! ignored so the client tolerates additive contract changes.

pub mod common;
pub mod connections;
pub mod databases;
pub mod models;
pub mod packages;
pub mod projects;
pub mod queries;
pub mod schedules;

pub use common::ApiErrorBody;
pub use connections::{
    BigqueryConnection, Connection, ConnectionType, PostgresConnection, SnowflakeConnection,
    TrinoConnection,
};
pub use databases::Database;
pub use models::{
    CellType, CompiledModel, Model, ModelQuery, ModelSource, ModelType, ModelView, NotebookCell,
};
pub use packages::Package;
pub use projects::{About, Project};
pub use queries::{QueryParams, QueryResult};
pub use schedules::Schedule;
