// ── Parse data model ──────────────────────────────────────────────────────

/// One command to run: `name` is argv[0], `args` the remaining tokens.
/// Always built from a non-empty token list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Split a non-empty argv into program name and arguments.
    pub(crate) fn from_argv(mut argv: Vec<String>) -> Command {
        let name = argv.remove(0);
        Command { name, args: argv }
    }
}

/// A pipeline is two or more commands connected by single `|` characters.
/// Stage i's stdout feeds stage i+1's stdin.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pipeline {
    pub commands: Vec<Command>,
}

/// How a chain element is joined to the one before it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Connector {
    /// `&&` — run only if the previous command succeeded (exit code 0)
    And,
    /// `||` — run only if the previous command failed  (exit code ≠ 0)
    Or,
}

impl Connector {
    /// The operator's source spelling, for diagnostics.
    pub fn token(self) -> &'static str {
        match self {
            Connector::And => "&&",
            Connector::Or => "||",
        }
    }
}

/// A single element of a logical chain:
/// - `connector` is `None` for the very first command, `Some(…)` for every
///   subsequent command and describes the operator that precedes it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ChainEntry {
    pub connector: Option<Connector>,
    pub command: Command,
}

/// One `;`-delimited portion of an input line. An empty entry list means the
/// segment was blank (`a ;; b`, trailing `;`) and runs nothing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment {
    pub entries: Vec<ChainEntry>,
}

/// What one input line parses to. The two forms are mutually exclusive: a
/// line with a pipe is never split on `;`/`&&`/`||`, and vice versa.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LinePlan {
    /// `cmd | cmd | …` — at least two stages.
    Pipeline(Pipeline),
    /// Everything else: `;`-separated segments, each a logical chain.
    Segments(Vec<Segment>),
}
