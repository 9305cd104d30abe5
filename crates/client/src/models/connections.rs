//! Database connection models.
//!
//! A [`Connection`] carries exactly one backend-specific attribute record,
//! matching its `type` discriminant; the others are absent on the wire.

use serde::{Deserialize, Serialize};

/// Database backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Postgres,
    Bigquery,
    Snowflake,
    Trino,
}

/// Postgres connection attributes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostgresConnection {
    pub host: String,
    pub port: u16,
    #[serde(rename = "databaseName")]
    pub database_name: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub password: String,
    #[serde(rename = "connectionString")]
    pub connection_string: String,
}

/// BigQuery connection attributes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BigqueryConnection {
    #[serde(rename = "defaultProjectId")]
    pub default_project_id: String,
    #[serde(rename = "billingProjectId")]
    pub billing_project_id: String,
    pub location: String,
    #[serde(rename = "serviceAccountKeyJson")]
    pub service_account_key_json: String,
    #[serde(rename = "maximumBytesBilled")]
    pub maximum_bytes_billed: String,
    #[serde(rename = "queryTimeoutMilliseconds")]
    pub query_timeout_milliseconds: String,
}

/// Snowflake connection attributes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SnowflakeConnection {
    pub account: String,
    pub username: String,
    pub password: String,
    pub warehouse: String,
    pub database: String,
    #[serde(rename = "schema")]
    pub schema_name: String,
    #[serde(rename = "responseTimeoutMilliseconds")]
    pub response_timeout_milliseconds: u64,
}

/// Trino connection attributes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrinoConnection {
    pub server: String,
    pub port: u16,
    pub catalog: String,
    #[serde(rename = "schema")]
    pub schema_name: String,
    pub user: String,
    pub password: String,
}

/// A named database connection configured on a project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Connection {
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    #[serde(
        rename = "postgresConnection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub postgres_connection: Option<PostgresConnection>,
    #[serde(
        rename = "bigqueryConnection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bigquery_connection: Option<BigqueryConnection>,
    #[serde(
        rename = "snowflakeConnection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub snowflake_connection: Option<SnowflakeConnection>,
    #[serde(
        rename = "trinoConnection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trino_connection: Option<TrinoConnection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<ConnectionType>("\"postgres\"").unwrap(),
            ConnectionType::Postgres
        );
        assert_eq!(
            serde_json::from_str::<ConnectionType>("\"bigquery\"").unwrap(),
            ConnectionType::Bigquery
        );
        assert!(serde_json::from_str::<ConnectionType>("\"duckdb2\"").is_err());
    }

    #[test]
    fn test_deserialize_postgres_connection() {
        let json = r#"{
            "name": "warehouse",
            "type": "postgres",
            "postgresConnection": {
                "host": "db.example.com",
                "port": 5432,
                "databaseName": "analytics",
                "userName": "malloy",
                "password": "hunter2",
                "connectionString": "postgres://db.example.com:5432/analytics"
            }
        }"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.name, "warehouse");
        assert_eq!(conn.connection_type, ConnectionType::Postgres);
        let pg = conn.postgres_connection.unwrap();
        assert_eq!(pg.port, 5432);
        assert!(conn.bigquery_connection.is_none());
    }

    #[test]
    fn test_connection_without_backend_attributes() {
        // The list endpoint may omit attribute records entirely.
        let json = r#"{"name": "bq", "type": "bigquery"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.connection_type, ConnectionType::Bigquery);
        assert!(conn.bigquery_connection.is_none());
    }
}
