//! REST API endpoint implementations.
//!
//! Each endpoint is a free async function taking the shared HTTP client, the
//! base URL, and the auth strategy. The [`MalloyClient`](crate::MalloyClient)
//! methods are thin wrappers over these functions.

mod connections;
mod databases;
mod models;
mod packages;
mod projects;
mod queries;
mod request;
mod schedules;
pub mod url_encoding;

pub use connections::{get_connection, list_connections};
pub use databases::list_databases;
pub use models::{get_model, list_models};
pub use packages::{get_package, list_packages};
pub use projects::{get_about, list_projects};
pub use queries::run_query;
pub use schedules::list_schedules;
pub use url_encoding::{encode_model_path, encode_path_segment};

pub(crate) use request::{apply_auth, parse_json, send_request};
