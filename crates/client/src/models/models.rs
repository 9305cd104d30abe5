//! Malloy model and compiled-model types.
//!
//! A package lists its models as lightweight [`Model`] records; fetching a
//! single model by path returns the full [`CompiledModel`] document with its
//! sources, named queries, and notebook cells.

use serde::{Deserialize, Serialize};

/// Kind of Malloy model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Source,
    Notebook,
}

/// Kind of notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
}

/// A model listed within a package.
///
/// The list endpoint does not echo the package name; it is attached
/// client-side after parsing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    #[serde(rename = "packageName", default)]
    pub package_name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
}

/// A view defined on a source.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelView {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// A source defined in a model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelSource {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub views: Vec<ModelView>,
}

/// A named query defined in a model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelQuery {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// A single notebook cell.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NotebookCell {
    #[serde(rename = "type")]
    pub cell_type: CellType,
    pub text: String,
    #[serde(rename = "queryName", default, skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
    #[serde(
        rename = "queryResult",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub query_result: Option<String>,
}

/// A compiled model document, returned when fetching a model by path.
///
/// `data_styles` and `model_def` are opaque compiler output and kept as raw
/// JSON values.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompiledModel {
    #[serde(rename = "packageName", default)]
    pub package_name: String,
    #[serde(rename = "modelPath")]
    pub path: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(rename = "malloyVersion")]
    pub malloy_version: String,
    #[serde(rename = "dataStyles", default)]
    pub data_styles: serde_json::Value,
    #[serde(rename = "modelDef", default)]
    pub model_def: serde_json::Value,
    #[serde(default)]
    pub sources: Vec<ModelSource>,
    #[serde(default)]
    pub queries: Vec<ModelQuery>,
    #[serde(rename = "notebookCells", default)]
    pub notebook_cells: Vec<NotebookCell>,
}
