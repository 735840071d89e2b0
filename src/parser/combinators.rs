use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take},
    character::complete::{anychar, char, multispace0},
    combinator::{map, not},
    multi::{many0, many_till},
    sequence::{preceded, terminated},
    IResult, Parser,
};

use super::ast::Connector;

// ── Low-level nom parsers ──────────────────────────────────────────────────

/// One whitespace-delimited token. No quoting, no escaping: a `"` is an
/// ordinary character.
fn token(input: &str) -> IResult<&str, String> {
    let (input, content) = preceded(multispace0, is_not(" \t\r\n")).parse(input)?;
    Ok((input, content.to_string()))
}

/// Split one command's text into argument tokens. Blank text yields an
/// empty vector. The input string is left untouched; tokens are owned copies.
pub fn tokenize(input: &str) -> Vec<String> {
    match many0(token).parse(input) {
        Ok((_, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}

/// A chain operator: `&&` or `||`. Two-character operators only; a lone `&`
/// or `|` is not one.
fn chain_operator(input: &str) -> IResult<&str, Connector> {
    alt((
        map(tag("&&"), |_| Connector::And),
        map(tag("||"), |_| Connector::Or),
    ))
    .parse(input)
}

/// A pipe separator: a single `|` that does not open a `||`.
fn pipe_separator(input: &str) -> IResult<&str, char> {
    terminated(char('|'), not(char('|'))).parse(input)
}

/// One piece of a pipeline stage's text. `||` is consumed atomically so the
/// separator scan cannot land on its second bar.
fn stage_piece(input: &str) -> IResult<&str, &str> {
    alt((tag("||"), take(1usize))).parse(input)
}

// ── Splitting ─────────────────────────────────────────────────────────────

/// Split a segment at every `&&`/`||`, earliest occurrence first, pairing
/// each piece of command text with the operator that precedes it. The first
/// piece has no operator. Operators bind without surrounding whitespace:
/// `a&&b` splits just like `a && b`.
pub fn split_chain(segment: &str) -> Vec<(Option<Connector>, String)> {
    let mut pieces = Vec::new();
    let mut pending: Option<Connector> = None;
    let mut rest = segment;
    loop {
        match many_till(anychar, chain_operator).parse(rest) {
            Ok((after, (chars, operator))) => {
                pieces.push((pending, chars.into_iter().collect()));
                pending = Some(operator);
                rest = after;
            }
            Err(_) => {
                pieces.push((pending, rest.to_string()));
                break;
            }
        }
    }
    pieces
}

/// Split a line at every single `|` into pipeline stage texts. `||` never
/// separates. A line without a pipe comes back whole as one element.
pub fn split_pipeline(line: &str) -> Vec<String> {
    let mut stages = Vec::new();
    let mut rest = line;
    loop {
        match many_till(stage_piece, pipe_separator).parse(rest) {
            Ok((after, (pieces, _))) => {
                stages.push(pieces.concat());
                rest = after;
            }
            Err(_) => {
                stages.push(rest.to_string());
                break;
            }
        }
    }
    stages
}
