use crate::error::Error;
use crate::storage::{Catalog, Column, Schema, Storage};
use crate::types::datatype::{DataType, parse_datatype};

pub(super) fn handle_create_table(
    table: String,
    specs: Vec<String>,
    catalog: &mut Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    if catalog.exists(&table) {
        return Err(Error::TableAlreadyExists(table));
    }

    let mut columns: Vec<Column> = Vec::with_capacity(specs.len());
    for spec in &specs {
        let Some((name, dtype)) = spec.split_once(':') else {
            return Err(bad_spec(spec));
        };
        let name = name.trim();
        let dtype = dtype.trim();
        if name.is_empty() || dtype.is_empty() {
            return Err(bad_spec(spec));
        }
        let dtype = parse_datatype(dtype).map_err(|_| bad_spec(spec))?;

        if columns.iter().any(|c| c.name == name)
            || (name.eq_ignore_ascii_case("id")
                && columns.iter().any(|c| c.name.eq_ignore_ascii_case("id")))
        {
            return Err(Error::DuplicateColumn(name.to_string()));
        }
        columns.push(Column {
            name: name.to_string(),
            dtype,
        });
    }

    // The identifier column always sits first: synthesized when missing,
    // moved to the front when the user declared it elsewhere.
    match columns.iter().position(|c| c.name.eq_ignore_ascii_case("id")) {
        None => columns.insert(
            0,
            Column {
                name: "ID".to_string(),
                dtype: DataType::Int,
            },
        ),
        Some(idx) => {
            if columns[idx].dtype != DataType::Int {
                return Err(Error::InvalidColumnSpec(format!(
                    "identifier column '{}' must be of type int",
                    columns[idx].name
                )));
            }
            if idx != 0 {
                let id = columns.remove(idx);
                columns.insert(0, id);
            }
        }
    }

    let schema = Schema::new(columns);
    let described = schema.describe();
    catalog.create_table(table.clone(), schema)?;
    storage.save_catalog(catalog)?;

    Ok(format!("created table {table} ({described})"))
}

fn bad_spec(spec: &str) -> Error {
    Error::InvalidColumnSpec(format!("'{spec}'. Use <name>:<int|str|bool>"))
}

pub(super) fn handle_drop_table(
    table: String,
    catalog: &mut Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    catalog.drop_table(&table)?;
    storage.save_catalog(catalog)?;
    // A dropped table's rows go with it, so re-creating the name starts empty.
    storage.remove_rows(&table)?;
    Ok(format!("dropped table {table}"))
}

pub(super) fn handle_info(
    table: String,
    catalog: &Catalog,
    storage: &mut dyn Storage,
) -> Result<String, Error> {
    let schema = catalog.schema(&table)?;
    let rows = storage.load_rows(&table, schema)?;
    Ok(format!(
        "table {table}\ncolumns: {}\nrows: {}",
        schema.describe(),
        rows.len()
    ))
}

pub(super) fn list_tables(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "no tables".to_string();
    }
    catalog.table_names().join("\n")
}

pub(super) fn help_text() -> String {
    [
        "Commands:",
        "  create_table <table> <name:type> [<name:type> ...]  create a table (types: int, str, bool)",
        "  drop_table <table>                                  remove a table and its rows",
        "  list_tables                                         list all tables",
        "  info <table>                                        show a table's columns and row count",
        "  insert into <table> values (<v1>, <v2>, ...)        add a record (ID is assigned automatically)",
        "  select from <table> [where <column> = <value>]      read records",
        "  update <table> set <column> = <value> where <column> = <value>",
        "  delete from <table> where <column> = <value>",
        "  help                                                show this help",
        "  exit                                                quit",
    ]
    .join("\n")
}
