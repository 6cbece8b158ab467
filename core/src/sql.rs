//! `CREATE TABLE` rendering from a column-name to column-type mapping.
//!
//! Identifiers are not quoted and types are not validated; both are emitted
//! exactly as given.

use tracing::warn;

/// Ordered column-name to SQL-type mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlSchema {
    columns: Vec<(String, String)>,
}

impl SqlSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Order of insertion is the order of rendering.
    pub fn column(mut self, name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        self.columns.push((name.into(), sql_type.into()));
        self
    }

    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Render `CREATE TABLE <table_name> (...)` with one column per line.
    ///
    /// An empty schema renders as `CREATE TABLE <table_name> \n);`, which is
    /// not valid SQL; callers that can produce empty schemas must check
    /// [`SqlSchema::is_empty`] first.
    pub fn build_ddl(&self, table_name: &str) -> String {
        let mut ddl = format!("CREATE TABLE {table_name} (\n");
        for (name, sql_type) in &self.columns {
            ddl.push_str(&format!("  {name} {sql_type},\n"));
        }
        if self.columns.is_empty() {
            warn!(table = table_name, "rendering DDL for a schema with no columns");
        }
        // Strip the last ",\n". With no columns this strips "(\n" instead.
        ddl.truncate(ddl.len() - 2);
        ddl.push_str("\n);");
        ddl
    }
}

impl<K, V> FromIterator<(K, V)> for SqlSchema
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, sql_type)| (name.into(), sql_type.into()))
                .collect(),
        }
    }
}
