use crate::error::Error;
use crate::parser::command::Command;
use crate::parser::parser::clause::{parse_clause, parse_literal};
use crate::parser::parser::tokenizer::Token;

use super::name_token;
use crate::types::value::Literal;

const INSERT_USAGE: &str = "Usage: insert into <table> values (<v1>, <v2>, ...)";
const SELECT_USAGE: &str = "Usage: select from <table> [where <column> = <value>]";
const UPDATE_USAGE: &str =
    "Usage: update <table> set <column> = <value> where <column> = <value>";
const DELETE_USAGE: &str = "Usage: delete from <table> where <column> = <value>";

fn usage(msg: &str) -> Error {
    Error::Syntax(msg.to_string())
}

pub(super) fn parse_insert(tokens: &[Token]) -> Result<Command, Error> {
    // insert into <table> values ( <v1> , <v2> , ... )
    if tokens.len() < 7
        || !tokens[1].is_word("into")
        || !tokens[3].is_word("values")
        || !tokens[4].is_symbol('(')
    {
        return Err(usage(INSERT_USAGE));
    }
    if !tokens[tokens.len() - 1].is_symbol(')') {
        return Err(usage("Unbalanced parentheses in INSERT values"));
    }
    let table = name_token(&tokens[2], INSERT_USAGE)?;

    let mut values: Vec<Literal> = Vec::new();
    let mut i = 5usize;
    let end = tokens.len() - 1;

    while i < end {
        values.push(parse_literal(&tokens[i])?);
        i += 1;
        if i < end {
            if !tokens[i].is_symbol(',') {
                return Err(usage("Bad INSERT values. Values must be comma-separated."));
            }
            i += 1;
            if i == end {
                return Err(usage("Bad INSERT values. Trailing comma in value list."));
            }
        }
    }

    if values.is_empty() {
        return Err(usage("INSERT requires at least one value"));
    }

    Ok(Command::Insert { table, values })
}

pub(super) fn parse_select(tokens: &[Token]) -> Result<Command, Error> {
    // select from <table> [where <column> = <value>]
    if tokens.len() < 3 || !tokens[1].is_word("from") {
        return Err(usage(SELECT_USAGE));
    }
    let table = name_token(&tokens[2], SELECT_USAGE)?;

    if tokens.len() == 3 {
        return Ok(Command::Select {
            table,
            filter: None,
        });
    }

    if !tokens[3].is_word("where") {
        return Err(usage(SELECT_USAGE));
    }
    let filter = parse_clause(&tokens[4..], "where")?;
    Ok(Command::Select {
        table,
        filter: Some(filter),
    })
}

pub(super) fn parse_update(tokens: &[Token]) -> Result<Command, Error> {
    // update <table> set <col> = <value> where <col> = <value>
    if tokens.len() < 10 || !tokens[2].is_word("set") {
        return Err(usage(UPDATE_USAGE));
    }
    let table = name_token(&tokens[1], UPDATE_USAGE)?;

    let where_idx = tokens
        .iter()
        .position(|t| t.is_word("where"))
        .ok_or_else(|| usage(UPDATE_USAGE))?;
    if where_idx <= 3 {
        return Err(usage(UPDATE_USAGE));
    }

    let set = parse_clause(&tokens[3..where_idx], "set")?;
    let filter = parse_clause(&tokens[where_idx + 1..], "where")?;

    Ok(Command::Update { table, set, filter })
}

pub(super) fn parse_delete(tokens: &[Token]) -> Result<Command, Error> {
    // delete from <table> where <col> = <value>
    if tokens.len() < 7 || !tokens[1].is_word("from") || !tokens[3].is_word("where") {
        return Err(usage(DELETE_USAGE));
    }
    let table = name_token(&tokens[2], DELETE_USAGE)?;
    let filter = parse_clause(&tokens[4..], "where")?;

    Ok(Command::Delete { table, filter })
}
