// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named JQL query catalog.
//!
//! The catalog is a document with a top-level `queries` list:
//!
//! ```yaml
//! queries:
//!   - name: mine
//!     jql: assignee = currentUser() ORDER BY updated DESC
//!     description: Everything assigned to me
//! ```
//!
//! YAML is the default format; files ending in `.toml` are read as TOML
//! with the same shape (`[[queries]]` tables).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A named, reusable JQL query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefinition {
    pub name: String,
    pub jql: String,
    #[serde(default)]
    pub description: String,
}

impl QueryDefinition {
    pub fn new(name: impl Into<String>, jql: impl Into<String>) -> Self {
        QueryDefinition {
            name: name.into(),
            jql: jql.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// On-disk shape. Entries stay untyped so one bad entry doesn't sink the file.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    queries: Option<Vec<Value>>,
}

/// Ordered set of query definitions, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCatalog {
    queries: Vec<QueryDefinition>,
}

/// Result of filtering the catalog by a list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Matching entries, in catalog order.
    pub queries: Vec<&'a QueryDefinition>,
    /// Requested names that matched no entry.
    pub unknown: Vec<String>,
}

impl QueryCatalog {
    pub fn new(queries: Vec<QueryDefinition>) -> Self {
        QueryCatalog { queries }
    }

    /// Loads the catalog from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist and
    /// [`Error::ConfigParseError`] if it cannot be read as a catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(Error::Io(e)),
        };
        Self::parse(&content, path)
    }

    /// Loads the catalog, degrading to an empty one on failure.
    ///
    /// The error (if any) is logged and handed back so the caller can show it.
    pub fn load_or_empty(path: &Path) -> (Self, Option<Error>) {
        match Self::load(path) {
            Ok(catalog) => {
                tracing::debug!(
                    path = %path.display(),
                    count = catalog.len(),
                    "query catalog loaded"
                );
                (catalog, None)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using empty query catalog");
                (Self::default(), Some(e))
            }
        }
    }

    /// Parses catalog content. `path` selects the format and names the source in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let parse_error = |reason: String| Error::ConfigParseError {
            path: PathBuf::from(path),
            reason,
        };

        let file: CatalogFile = if is_toml(path) {
            toml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        } else {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        };

        let mut queries = Vec::new();
        for (idx, entry) in file.queries.unwrap_or_default().iter().enumerate() {
            match definition_from(entry) {
                Some(query) => queries.push(query),
                None => {
                    tracing::warn!(
                        entry = idx + 1,
                        "skipping invalid query entry: name and jql are required"
                    );
                }
            }
        }

        Ok(QueryCatalog { queries })
    }

    /// Looks up a query by name. The first entry with a matching name wins.
    pub fn find(&self, name: &str) -> Result<&QueryDefinition> {
        self.queries
            .iter()
            .find(|q| q.name == name)
            .ok_or_else(|| Error::QueryNotFound {
                name: name.to_string(),
            })
    }

    /// The default query: the first entry in source order.
    pub fn first(&self) -> Option<&QueryDefinition> {
        self.queries.first()
    }

    /// Entries whose names appear in `names`, in catalog order.
    ///
    /// Duplicate names in the catalog are all selected.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Selection<'_> {
        let queries = self
            .queries
            .iter()
            .filter(|q| names.iter().any(|n| n.as_ref() == q.name))
            .collect();
        let unknown = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| !self.queries.iter().any(|q| q.name == *n))
            .map(String::from)
            .collect();
        Selection { queries, unknown }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryDefinition> {
        self.queries.iter()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl<'a> IntoIterator for &'a QueryCatalog {
    type Item = &'a QueryDefinition;
    type IntoIter = std::slice::Iter<'a, QueryDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

/// Builds a definition from one catalog entry; `None` unless it is a mapping
/// with a non-blank `name` and a `jql`.
fn definition_from(entry: &Value) -> Option<QueryDefinition> {
    let fields = entry.as_object()?;
    let name = scalar_text(fields.get("name")?)?;
    if name.trim().is_empty() {
        return None;
    }
    Some(QueryDefinition {
        name,
        jql: scalar_text(fields.get("jql")?)?,
        description: fields
            .get("description")
            .and_then(scalar_text)
            .unwrap_or_default(),
    })
}

/// Strings as-is; numbers and booleans as written (`name: 2024`).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
