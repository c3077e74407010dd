use std::collections::HashMap;

use crate::error::Error;
use crate::storage::catalog::Catalog;
use crate::storage::engine::Storage;
use crate::storage::schema::Schema;
use crate::types::Row;

/// In-memory backend. Loads hand out clones so the engine sees the same
/// value semantics as the disk backend; useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemStorage {
    catalog: Catalog,
    tables: HashMap<String, Vec<Row>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            tables: HashMap::new(),
        }
    }
}

impl Storage for MemStorage {
    fn load_catalog(&self) -> Result<Catalog, Error> {
        Ok(self.catalog.clone())
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), Error> {
        self.catalog = catalog.clone();
        Ok(())
    }

    fn load_rows(&self, table: &str, _schema: &Schema) -> Result<Vec<Row>, Error> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }

    fn save_rows(&mut self, table: &str, _schema: &Schema, rows: &[Row]) -> Result<(), Error> {
        self.tables.insert(table.to_string(), rows.to_vec());
        Ok(())
    }

    fn remove_rows(&mut self, table: &str) -> Result<(), Error> {
        self.tables.remove(table);
        Ok(())
    }
}
