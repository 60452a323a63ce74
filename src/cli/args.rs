/// CLI argument definitions via clap derive.
use clap::Parser;

/// bcalc — four-argument integer calculator.
///
/// The surface is exactly three positional tokens: `bcalc <number> <op> <number>`.
/// The automatic help flag is disabled because any invocation that is not three
/// positional tokens — `--help` included — is the wrong-argument-count case and
/// must produce the usage line with exit code 1.
#[derive(Debug, Parser)]
#[command(
    name = "bcalc",
    about = "Four-argument integer calculator for the command line",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Left operand. Leading-integer extraction; non-numeric text becomes 0.
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub lhs: String,

    /// Operator token. Only the first character is inspected: + - * /
    #[arg(value_name = "OP", allow_hyphen_values = true)]
    pub op: String,

    /// Right operand. Leading-integer extraction; non-numeric text becomes 0.
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub rhs: String,
}
