#![deny(clippy::all, clippy::pedantic)]
//! bcalc — four-argument integer calculator for the command line.

mod calc;
mod cli;

use clap::Parser;

use calc::Evaluation;
use cli::{Cli, format_result, usage};

fn main() {
    // Gate on the raw token count first: clap drops a bare `--` as its
    // trailing-args escape, which would let four-token shapes like
    // `bcalc -- 3 + 4` through. Program name + three user tokens.
    if std::env::args_os().len() != 4 {
        println!("{}", usage());
        std::process::exit(1);
    }

    // Any remaining shape clap cannot read as three positional tokens
    // (flag-like noise, a lone `--`) takes the same usage path.
    let Ok(cli) = Cli::try_parse() else {
        println!("{}", usage());
        std::process::exit(1);
    };

    match calc::evaluate(&cli.lhs, &cli.op, &cli.rhs) {
        Ok(Evaluation::Value(value)) => println!("{}", format_result(value)),
        // Unrecognized operator: intentionally no output, success exit.
        Ok(Evaluation::NoOp) => {}
        Err(err) => {
            eprintln!("bcalc: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
