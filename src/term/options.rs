use crate::mach::Limits;
use std::path::PathBuf;
use structopt::StructOpt;

/// Compile arithmetic expressions in two variables and evaluate them.
///
/// With neither an expression nor a file, expressions are read
/// interactively until end of input.
#[derive(StructOpt, Debug)]
#[structopt(name = "parseval")]
pub struct Options {
    /// Expression to evaluate, e.g. `10*(x + y)/2.0 + sin(pi*0.5)`.
    pub expression: Option<String>,

    /// File of expressions to evaluate, one per line. Blank lines are skipped.
    #[structopt(short, long, parse(from_os_str), conflicts_with = "expression")]
    pub file: Option<PathBuf>,

    /// Spelling of the first variable. An empty name leaves it out.
    #[structopt(long, default_value = "x")]
    pub x_name: String,

    /// Spelling of the second variable. An empty name leaves it out.
    #[structopt(long, default_value = "y")]
    pub y_name: String,

    /// Value of the first variable.
    #[structopt(short = "x", long = "x-value", default_value = "0", allow_hyphen_values = true)]
    pub x: f64,

    /// Value of the second variable.
    #[structopt(short = "y", long = "y-value", default_value = "0", allow_hyphen_values = true)]
    pub y: f64,

    /// Print the compiled tape before each result.
    #[structopt(long)]
    pub listing: bool,

    /// Digits after the decimal point in printed results.
    #[structopt(long)]
    pub precision: Option<usize>,

    /// Most words the tape may hold.
    #[structopt(long)]
    pub max_code_len: Option<usize>,

    /// Most distinct constants one expression may hold.
    #[structopt(long)]
    pub max_constants: Option<usize>,

    /// Deepest nesting of parentheses, calls and signs.
    #[structopt(long)]
    pub max_depth: Option<usize>,

    /// Output verbosity.
    /// Default: errors.
    /// -v: warnings.
    /// -vv: info.
    /// -vvv: debug.
    /// -vvvv: trace.
    #[structopt(short, parse(from_occurrences))]
    pub verbosity: u8,
}

impl Options {
    pub fn limits(&self) -> Limits {
        let default = Limits::default();
        Limits {
            max_code_len: self.max_code_len.unwrap_or(default.max_code_len),
            max_constants: self.max_constants.unwrap_or(default.max_constants),
            max_depth: self.max_depth.unwrap_or(default.max_depth),
        }
    }

    pub fn filter_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
