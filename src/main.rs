use std::env;
use std::process;

use gradfit::Error;
use gradfit::cli::{self, Invocation};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let result = Invocation::from_args(&args).and_then(|invocation| cli::run(&invocation));
    match result {
        Ok(_) => {}
        Err(Error::Usage { program }) => {
            eprintln!("Error: invalid number of arguments provided.\n\n{}", cli::usage(&program));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
