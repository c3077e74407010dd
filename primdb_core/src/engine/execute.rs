mod ddl;
mod dml;

use tracing::debug;

use crate::error::Error;
use crate::parser::command::{Clause, Command};
use crate::storage::{Catalog, Schema, Storage};
use crate::types::value::Value;

/// Executes a parsed command against the catalog and a storage backend.
/// Returns the text to show the user. Failures never leave partially
/// applied state behind: nothing is saved until an operation has fully
/// validated.
pub fn execute_command(
    cmd: Command,
    catalog: &mut Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    debug!(?cmd, "executing command");
    match cmd {
        Command::CreateTable { table, columns } => {
            ddl::handle_create_table(table, columns, catalog, storage)
        }
        Command::DropTable { table } => ddl::handle_drop_table(table, catalog, storage),
        Command::Insert { table, values } => dml::handle_insert(table, values, catalog, storage),
        Command::Select { table, filter } => dml::handle_select(table, filter, catalog, storage),
        Command::Update { table, set, filter } => {
            dml::handle_update(table, set, filter, catalog, storage)
        }
        Command::Delete { table, filter } => dml::handle_delete(table, filter, catalog, storage),
        Command::Info { table } => ddl::handle_info(table, catalog, storage),
        Command::ListTables => Ok(ddl::list_tables(catalog)),
        Command::Help => Ok(ddl::help_text()),
        Command::Exit => Ok("bye".to_string()),
    }
}

/// Resolves a set/where clause against a schema: finds the column
/// (exact-name match, with the identifier column also reachable by any
/// casing of `id`) and coerces the literal to its declared type.
fn resolve_clause(schema: &Schema, clause: &Clause) -> Result<(usize, Value), Error> {
    let idx = schema
        .position(&clause.column)
        .or_else(|| {
            clause
                .column
                .eq_ignore_ascii_case("id")
                .then(|| schema.id_position())
                .flatten()
        })
        .ok_or_else(|| Error::UnknownColumn(clause.column.clone()))?;
    let value = Value::coerce(&clause.value, schema.columns[idx].dtype)?;
    Ok((idx, value))
}
