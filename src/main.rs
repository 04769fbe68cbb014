// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary entry point: parse arguments, run the benchmark, print the report.

use prime_sieve::cli::{self, ParseOutcome};
use prime_sieve::runner;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sieve");

    let options = match cli::parse_args(&args[1..]) {
        ParseOutcome::Run(options) => options,
        ParseOutcome::Help => {
            print!("{}", cli::usage(program));
            return 0;
        }
        ParseOutcome::Error => {
            print!("{}", cli::usage(program));
            return 1;
        }
    };

    for warning in &options.warnings {
        println!("{}", warning);
    }
    if !options.warnings.is_empty() {
        println!();
    }

    if !options.quiet {
        print!("{}", cli::banner(&options.config));
    }

    let result = match runner::run(&options.config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            return 1;
        }
    };

    if !options.quiet {
        println!("\n---------------------------------------------");
    }
    print!("{}", cli::report(&options.config, &result));

    if options.dragrace {
        println!("\n{}", cli::dragrace_line(&result));
    }

    0
}
