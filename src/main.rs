//! jmake - run justfile recipes via make

use clap::Parser;

use jmake::cli::{context::print_error, Cli};

/// Environment variable holding the log filter
const LOG_ENV: &str = "JMAKE_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version come through here too, on stdout
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = jmake::cli::run(&cli) {
        print_error(&format!("jmake: {:#}", err));
        std::process::exit(1);
    }
}
