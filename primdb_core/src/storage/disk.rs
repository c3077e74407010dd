use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::error::Error;
use crate::storage::catalog::Catalog;
use crate::storage::engine::Storage;
use crate::storage::schema::{Column, Schema};
use crate::types::Row;
use crate::types::datatype::{DataType, parse_datatype};
use crate::types::value::Value;

/// Disk backend using the store's JSON layout: `db_meta.json` maps table
/// name to an ordered {column name -> type string} object, and
/// `data/<table>.json` holds an array of {column name -> scalar} objects.
/// Directories are created lazily on first save.
#[derive(Debug)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn catalog_path(&self) -> PathBuf {
        self.root.join("db_meta.json")
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root.join("data").join(format!("{table}.json"))
    }

    fn ensure_parent(path: &Path) -> Result<(), Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::Storage(format!("Failed to create '{}': {e}", dir.display())))?;
        }
        Ok(())
    }
}

impl Storage for DiskStorage {
    fn load_catalog(&self) -> Result<Catalog, Error> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(Catalog::new());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Storage(format!("Failed to read catalog file: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Catalog::new());
        }

        let tables: Map<String, JsonValue> = serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("Malformed catalog JSON: {e}")))?;

        let mut catalog = Catalog::new();
        for (table, cols) in tables {
            let JsonValue::Object(cols) = cols else {
                return Err(Error::Storage(format!(
                    "Malformed catalog entry for table '{table}': expected an object"
                )));
            };
            let mut columns: Vec<Column> = Vec::with_capacity(cols.len());
            for (name, dtype) in cols {
                let JsonValue::String(dtype) = dtype else {
                    return Err(Error::Storage(format!(
                        "Malformed column type for '{table}.{name}': expected a string"
                    )));
                };
                let dtype = parse_datatype(&dtype).map_err(|_| {
                    Error::Storage(format!("Unknown type '{dtype}' in catalog for '{table}.{name}'"))
                })?;
                columns.push(Column { name, dtype });
            }
            catalog
                .create_table(table, Schema::new(columns))
                .map_err(|e| Error::Storage(e.to_string()))?;
        }
        debug!(tables = catalog.table_names().len(), "loaded catalog");
        Ok(catalog)
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), Error> {
        let mut tables: Map<String, JsonValue> = Map::new();
        for table in catalog.table_names() {
            let schema = catalog.schema(table)?;
            let mut cols: Map<String, JsonValue> = Map::new();
            for c in &schema.columns {
                cols.insert(c.name.clone(), JsonValue::String(c.dtype.as_str().to_string()));
            }
            tables.insert(table.to_string(), JsonValue::Object(cols));
        }

        let payload = serde_json::to_string_pretty(&tables)
            .map_err(|e| Error::Storage(format!("Failed to serialize catalog as JSON: {e}")))?;
        let path = self.catalog_path();
        Self::ensure_parent(&path)?;
        fs::write(&path, payload)
            .map_err(|e| Error::Storage(format!("Failed to write catalog file: {e}")))?;
        debug!(path = %path.display(), "saved catalog");
        Ok(())
    }

    fn load_rows(&self, table: &str, schema: &Schema) -> Result<Vec<Row>, Error> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Storage(format!("Failed to read rows for '{table}': {e}")))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Map<String, JsonValue>> = serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("Malformed rows JSON for '{table}': {e}")))?;

        let mut rows: Vec<Row> = Vec::with_capacity(records.len());
        for (record_no, record) in records.iter().enumerate() {
            let mut row: Row = Vec::with_capacity(schema.column_count());
            for column in &schema.columns {
                let raw = record.get(&column.name).ok_or_else(|| {
                    Error::Storage(format!(
                        "Record {} in '{table}' is missing column '{}'",
                        record_no + 1,
                        column.name
                    ))
                })?;
                row.push(decode_scalar(raw, column.dtype).ok_or_else(|| {
                    Error::Storage(format!(
                        "Record {} in '{table}' has a non-{} value in column '{}'",
                        record_no + 1,
                        column.dtype.as_str(),
                        column.name
                    ))
                })?);
            }
            rows.push(row);
        }
        debug!(table, rows = rows.len(), "loaded rows");
        Ok(rows)
    }

    fn save_rows(&mut self, table: &str, schema: &Schema, rows: &[Row]) -> Result<(), Error> {
        let mut records: Vec<Map<String, JsonValue>> = Vec::with_capacity(rows.len());
        for row in rows {
            let mut record: Map<String, JsonValue> = Map::new();
            for (column, value) in schema.columns.iter().zip(row) {
                let scalar = serde_json::to_value(value)
                    .map_err(|e| Error::Storage(format!("Failed to serialize row: {e}")))?;
                record.insert(column.name.clone(), scalar);
            }
            records.push(record);
        }

        let payload = serde_json::to_string_pretty(&records)
            .map_err(|e| Error::Storage(format!("Failed to serialize rows as JSON: {e}")))?;
        let path = self.table_path(table);
        Self::ensure_parent(&path)?;
        fs::write(&path, payload)
            .map_err(|e| Error::Storage(format!("Failed to write rows for '{table}': {e}")))?;
        debug!(table, rows = rows.len(), "saved rows");
        Ok(())
    }

    fn remove_rows(&mut self, table: &str) -> Result<(), Error> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path)
            .map_err(|e| Error::Storage(format!("Failed to remove rows for '{table}': {e}")))
    }
}

/// JSON scalars map directly onto cell values; numbers must be integers
/// and must match the declared column type exactly.
fn decode_scalar(raw: &JsonValue, dtype: DataType) -> Option<Value> {
    match (dtype, raw) {
        (DataType::Int, JsonValue::Number(n)) => n.as_i64().map(Value::Int),
        (DataType::Str, JsonValue::String(s)) => Some(Value::Str(s.clone())),
        (DataType::Bool, JsonValue::Bool(b)) => Some(Value::Bool(*b)),
        _ => None,
    }
}
