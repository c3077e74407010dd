use crate::error::Error;
use crate::storage::catalog::Catalog;
use crate::storage::schema::Schema;
use crate::types::Row;

/// Persistence seam between the record engine and a backend
/// (disk-based, in-memory, etc.). The engine treats persisted state as the
/// source of truth: it loads before every operation and saves after every
/// successful mutation.
pub trait Storage {
    /// Loads the catalog; an absent store yields an empty catalog, never an
    /// error.
    fn load_catalog(&self) -> Result<Catalog, Error>;

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), Error>;

    /// Loads a table's rows in insertion order; absent yields an empty
    /// sequence. The schema types the stored scalars.
    fn load_rows(&self, table: &str, schema: &Schema) -> Result<Vec<Row>, Error>;

    fn save_rows(&mut self, table: &str, schema: &Schema, rows: &[Row]) -> Result<(), Error>;

    /// Removes a table's row store. Idempotent: removing an absent store
    /// succeeds.
    fn remove_rows(&mut self, table: &str) -> Result<(), Error>;
}
