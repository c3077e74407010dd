use crate::error::Error;

/// A lexed fragment of a command line. Keywords and column names only ever
/// match `Word`, so a quoted string containing e.g. `values` or `where`
/// can never be mistaken for a keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    Str(String),
    Symbol(char),
}

impl Token {
    pub fn is_word(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    pub fn is_symbol(&self, sym: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == sym)
    }
}

fn syntax(msg: &str) -> Error {
    Error::Syntax(msg.to_string())
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut just_closed_quote = false;

    let mut it = input.chars().peekable();

    while let Some(ch) = it.next() {
        match ch {
            '"' => {
                if just_closed_quote {
                    return Err(syntax(
                        "Unexpected quote after closing quote. Add whitespace between tokens.",
                    ));
                }

                if !in_quotes {
                    if !current.is_empty() {
                        return Err(syntax(
                            "Quote (\") cannot start in the middle of a token. Add whitespace before the quote.",
                        ));
                    }
                    in_quotes = true;
                } else {
                    in_quotes = false;
                    just_closed_quote = true;
                }
            }

            '\\' if in_quotes => {
                match it.peek().copied() {
                    Some('"') => {
                        it.next();
                        current.push('"');
                    }
                    Some('\\') => {
                        it.next();
                        current.push('\\');
                    }
                    _ => {
                        return Err(syntax(
                            "Invalid escape sequence in quotes. Use \\\" for a quote or \\\\ for a backslash.",
                        ));
                    }
                }
            }

            _ if in_quotes => current.push(ch),

            c if c.is_whitespace() => {
                if just_closed_quote {
                    tokens.push(Token::Str(std::mem::take(&mut current)));
                    just_closed_quote = false;
                } else if !current.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut current)));
                }
            }

            ',' | '(' | ')' | '=' => {
                if just_closed_quote {
                    tokens.push(Token::Str(std::mem::take(&mut current)));
                    just_closed_quote = false;
                } else if !current.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut current)));
                }
                tokens.push(Token::Symbol(ch));
            }

            _ => {
                if just_closed_quote {
                    return Err(syntax(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted string.",
                    ));
                }
                current.push(ch);
            }
        }
    }

    if in_quotes {
        return Err(syntax("Unclosed quote (\") in input"));
    }

    if just_closed_quote {
        tokens.push(Token::Str(current));
    } else if !current.is_empty() {
        tokens.push(Token::Word(current));
    }

    Ok(tokens)
}
