mod ast;
mod combinators;

pub use ast::{ChainEntry, Command, Connector, LinePlan, Pipeline, Segment};

pub use combinators::tokenize;

// ── Public API ────────────────────────────────────────────────────────────

/// Parse one input line into a [`LinePlan`].
///
/// The two parse paths are mutually exclusive and never compose: a line
/// containing a pipe (a single `|`, not part of `||`) is split into pipeline
/// stages and is never split on `;`/`&&`/`||`; chain operators inside a
/// stage survive as ordinary tokens. Any other line is split on `;` into
/// segments, each of which is a logical chain.
///
/// Errors carry the complete user-facing message for dangling operators and
/// empty pipeline stages.
pub fn parse_line(input: &str) -> Result<LinePlan, String> {
    let stages = combinators::split_pipeline(input);
    if stages.len() > 1 {
        let mut commands = Vec::with_capacity(stages.len());
        for stage in &stages {
            let argv = combinators::tokenize(stage);
            if argv.is_empty() {
                return Err("hyzen: syntax error near unexpected token `|'".to_string());
            }
            commands.push(Command::from_argv(argv));
        }
        return Ok(LinePlan::Pipeline(Pipeline { commands }));
    }

    let mut segments = Vec::new();
    for text in input.split(';') {
        segments.push(parse_segment(text)?);
    }
    Ok(LinePlan::Segments(segments))
}

/// Build one segment's logical chain. A blank segment (nothing but
/// whitespace, no operators) is legal and runs nothing; a missing command
/// next to an operator is a syntax error.
fn parse_segment(text: &str) -> Result<Segment, String> {
    let pieces = combinators::split_chain(text);
    let has_operators = pieces.len() > 1;

    let mut entries = Vec::with_capacity(pieces.len());
    for (connector, piece) in &pieces {
        let argv = combinators::tokenize(piece);
        if argv.is_empty() {
            if !has_operators {
                return Ok(Segment { entries: Vec::new() });
            }
            return Err(match connector {
                Some(op) => format!("hyzen: syntax error: expected command after `{}'", op.token()),
                // Leading gap: name the operator that follows it. `pieces[1]`
                // exists and carries an operator whenever splitting occurred.
                None => {
                    let op = pieces[1].0.map(Connector::token).unwrap_or("&&");
                    format!("hyzen: syntax error near unexpected token `{op}'")
                }
            });
        }
        entries.push(ChainEntry {
            connector: *connector,
            command: Command::from_argv(argv),
        });
    }
    Ok(Segment { entries })
}

// ── Tests ──────────────────────────────────────────────────────────────────
