use crate::engine::format::format_select;
use crate::error::Error;
use crate::parser::command::Clause;
use crate::storage::{Catalog, Storage};
use crate::types::Row;
use crate::types::value::{Literal, Value};

use super::resolve_clause;

pub(super) fn handle_insert(
    table: String,
    values: Vec<Literal>,
    catalog: &Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    let schema = catalog.schema(&table)?;
    let id_pos = schema
        .id_position()
        .ok_or_else(|| Error::Storage(format!("Table '{table}' has no identifier column")))?;

    let non_id = schema.non_id_columns();
    if values.len() != non_id.len() {
        return Err(Error::ArityMismatch {
            expected: non_id.len(),
            got: values.len(),
        });
    }

    // All-or-nothing: every value must coerce before anything is stored.
    let mut coerced: Vec<Value> = Vec::with_capacity(values.len());
    for (column, literal) in non_id.iter().zip(&values) {
        coerced.push(Value::coerce(literal, column.dtype)?);
    }

    let mut rows = storage.load_rows(&table, schema)?;
    let max_id = rows
        .iter()
        .filter_map(|row| match row.get(id_pos) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        })
        .max()
        .unwrap_or(0);
    let new_id = max_id + 1;

    let mut coerced = coerced.into_iter();
    let mut row: Row = Vec::with_capacity(schema.column_count());
    for idx in 0..schema.column_count() {
        if idx == id_pos {
            row.push(Value::Int(new_id));
        } else {
            // Arity was checked above, so the iterator cannot run dry.
            row.push(coerced.next().expect("one value per non-id column"));
        }
    }

    rows.push(row);
    storage.save_rows(&table, schema, &rows)?;
    Ok(format!("inserted row with ID={new_id} into {table}"))
}

pub(super) fn handle_select(
    table: String,
    filter: Option<Clause>,
    catalog: &Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    let schema = catalog.schema(&table)?;
    let rows = storage.load_rows(&table, schema)?;

    let rows = match filter {
        None => rows,
        Some(clause) => {
            let (idx, value) = resolve_clause(schema, &clause)?;
            rows.into_iter()
                .filter(|row| row.get(idx) == Some(&value))
                .collect()
        }
    };

    Ok(format_select(schema, &rows))
}

pub(super) fn handle_update(
    table: String,
    set: Clause,
    filter: Clause,
    catalog: &Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    let schema = catalog.schema(&table)?;
    let (set_idx, set_value) = resolve_clause(schema, &set)?;
    let (where_idx, where_value) = resolve_clause(schema, &filter)?;

    let mut rows = storage.load_rows(&table, schema)?;
    let mut updated = 0usize;
    for row in rows.iter_mut() {
        if row.get(where_idx) == Some(&where_value) {
            row[set_idx] = set_value.clone();
            updated += 1;
        }
    }

    if updated > 0 {
        storage.save_rows(&table, schema, &rows)?;
    }
    Ok(format!("updated {updated} row(s) in {table}"))
}

pub(super) fn handle_delete(
    table: String,
    filter: Clause,
    catalog: &Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    let schema = catalog.schema(&table)?;
    let (idx, value) = resolve_clause(schema, &filter)?;

    let rows = storage.load_rows(&table, schema)?;
    let before = rows.len();
    let kept: Vec<Row> = rows
        .into_iter()
        .filter(|row| row.get(idx) != Some(&value))
        .collect();
    let deleted = before - kept.len();

    if deleted > 0 {
        storage.save_rows(&table, schema, &kept)?;
    }
    Ok(format!("deleted {deleted} row(s) from {table}"))
}
