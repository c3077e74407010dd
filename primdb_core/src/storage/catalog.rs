use std::collections::HashMap;

use crate::error::Error;
use crate::storage::schema::Schema;

/// In-memory catalog of table schemas. The engine reloads it from storage
/// at the start of every command, so this is a per-command snapshot, not a
/// long-lived cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: HashMap<String, Schema>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    /// Adds a table. The schema must already carry its identifier column;
    /// fails if the name is taken, leaving the catalog unchanged.
    pub fn create_table(&mut self, table: String, schema: Schema) -> Result<(), Error> {
        if self.exists(&table) {
            return Err(Error::TableAlreadyExists(table));
        }
        self.tables.insert(table, schema);
        Ok(())
    }

    /// Removes a table entry; fails if absent, leaving the catalog unchanged.
    pub fn drop_table(&mut self, table: &str) -> Result<(), Error> {
        if self.tables.remove(table).is_none() {
            return Err(Error::UnknownTable(table.to_string()));
        }
        Ok(())
    }

    pub fn schema(&self, table: &str) -> Result<&Schema, Error> {
        self.tables
            .get(table)
            .ok_or_else(|| Error::UnknownTable(table.to_string()))
    }

    /// Table names in sorted order, for list_tables and persistence.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
