use crate::error::Error;
use crate::parser::command::Clause;
use crate::parser::parser::tokenizer::Token;
use crate::types::value::Literal;

/// Classifies a single scalar token. Quoted text is a string literal; bare
/// `true`/`false` (any case) is a bool; bare digits are an int. Any other
/// bare token is rejected so that unquoted strings never slip through.
pub(super) fn parse_literal(token: &Token) -> Result<Literal, Error> {
    match token {
        Token::Str(s) => Ok(Literal::Str(s.clone())),
        Token::Word(w) => {
            let low = w.to_lowercase();
            if low == "true" {
                return Ok(Literal::Bool(true));
            }
            if low == "false" {
                return Ok(Literal::Bool(false));
            }
            if let Ok(n) = w.parse::<i64>() {
                return Ok(Literal::Int(n));
            }
            Err(Error::Syntax(format!(
                "Bad value '{w}'. Strings must be double-quoted."
            )))
        }
        Token::Symbol(c) => Err(Error::Syntax(format!(
            "Bad value '{c}'. Strings must be double-quoted."
        ))),
    }
}

/// Parses a `set`/`where` fragment of the exact shape `<column> = <value>`:
/// three tokens, the middle one `=`.
pub(super) fn parse_clause(tokens: &[Token], kind: &'static str) -> Result<Clause, Error> {
    if tokens.len() != 3 || !tokens[1].is_symbol('=') {
        return Err(Error::MalformedClause { kind });
    }
    let column = match &tokens[0] {
        Token::Word(w) => w.clone(),
        _ => return Err(Error::MalformedClause { kind }),
    };
    let value = parse_literal(&tokens[2])?;
    Ok(Clause { column, value })
}
