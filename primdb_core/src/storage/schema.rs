use crate::types::datatype::DataType;

/// Represents a single column in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub dtype: DataType,
}

/// Ordered column list for one table. The identifier column (named `id`,
/// any case) is always at position 0 and always of type int; the engine
/// enforces that when the schema is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by exact name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Position of the identifier column.
    pub fn id_position(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case("id"))
    }

    /// Columns the user supplies values for on insert, in declared order.
    pub fn non_id_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| !c.name.eq_ignore_ascii_case("id"))
            .collect()
    }

    /// `name:type, name:type, ...` as shown by create_table and info.
    pub fn describe(&self) -> String {
        self.columns
            .iter()
            .map(|c| format!("{}:{}", c.name, c.dtype.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
