use crate::types::value::Literal;

/// One `<column> = <value>` equality pair, used by both `set` and `where`.
/// Never compound: the grammar has no AND/OR.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub column: String,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateTable {
        table: String,
        /// Raw `name:type` specs exactly as typed; the engine validates them.
        columns: Vec<String>,
    },
    DropTable {
        table: String,
    },
    Insert {
        table: String,
        values: Vec<Literal>,
    },
    Select {
        table: String,
        filter: Option<Clause>,
    },
    Update {
        table: String,
        set: Clause,
        filter: Clause,
    },
    Delete {
        table: String,
        filter: Clause,
    },
    Info {
        table: String,
    },
    ListTables,
    Help,
    Exit,
}
