mod clause;
mod dml;
mod tokenizer;

pub use tokenizer::{Token, tokenize};

use crate::error::Error;
use crate::parser::command::Command;
use dml::{parse_delete, parse_insert, parse_select, parse_update};

/// Parses one command line into a structured command. Purely syntactic:
/// the catalog is never consulted, so e.g. a value-count mismatch is only
/// caught by the engine.
pub fn parse(input: &str) -> Result<Command, Error> {
    let tokens = tokenize(input)?;
    let Some(Token::Word(keyword)) = tokens.first() else {
        return Err(Error::Syntax("Empty command".to_string()));
    };

    match keyword.to_lowercase().as_str() {
        "create_table" => parse_create_table(&tokens),
        "drop_table" => parse_drop_table(&tokens),
        "insert" => parse_insert(&tokens),
        "select" => parse_select(&tokens),
        "update" => parse_update(&tokens),
        "delete" => parse_delete(&tokens),
        "info" => parse_info(&tokens),
        "list_tables" => expect_bare(&tokens, Command::ListTables, "list_tables"),
        "help" => expect_bare(&tokens, Command::Help, "help"),
        "exit" => expect_bare(&tokens, Command::Exit, "exit"),
        _ => Err(Error::Syntax(format!(
            "Unknown command '{keyword}'. Type 'help' for usage."
        ))),
    }
}

/// A table or column-spec argument: a bare word, or a quoted token so a
/// spec may contain spaces. Symbols are never names.
fn name_token(token: &Token, usage: &str) -> Result<String, Error> {
    let text = match token {
        Token::Word(w) => w.as_str(),
        Token::Str(s) => s.as_str(),
        Token::Symbol(_) => return Err(Error::Syntax(usage.to_string())),
    };
    if text.is_empty() {
        return Err(Error::Syntax(usage.to_string()));
    }
    Ok(text.to_string())
}

fn parse_create_table(tokens: &[Token]) -> Result<Command, Error> {
    const USAGE: &str = "Usage: create_table <table> <name:type> [<name:type> ...]";
    if tokens.len() < 3 {
        return Err(Error::Syntax(USAGE.to_string()));
    }
    let table = name_token(&tokens[1], USAGE)?;
    let columns = tokens[2..]
        .iter()
        .map(|t| name_token(t, USAGE))
        .collect::<Result<Vec<String>, Error>>()?;
    Ok(Command::CreateTable { table, columns })
}

fn parse_drop_table(tokens: &[Token]) -> Result<Command, Error> {
    const USAGE: &str = "Usage: drop_table <table>";
    if tokens.len() != 2 {
        return Err(Error::Syntax(USAGE.to_string()));
    }
    let table = name_token(&tokens[1], USAGE)?;
    Ok(Command::DropTable { table })
}

fn parse_info(tokens: &[Token]) -> Result<Command, Error> {
    const USAGE: &str = "Usage: info <table>";
    if tokens.len() != 2 {
        return Err(Error::Syntax(USAGE.to_string()));
    }
    let table = name_token(&tokens[1], USAGE)?;
    Ok(Command::Info { table })
}

fn expect_bare(tokens: &[Token], cmd: Command, verb: &str) -> Result<Command, Error> {
    if tokens.len() != 1 {
        return Err(Error::Syntax(format!("'{verb}' takes no arguments")));
    }
    Ok(cmd)
}
