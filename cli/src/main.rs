mod error;
mod logger;

use clap::{App, AppSettings, Arg, ArgMatches};
use error::CliError;
use kea::{parser::Position, prover, Error};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

const APP_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

fn app() -> App<'static, 'static> {
    App::new("kea")
        .version(APP_VERSION.unwrap_or("unknown"))
        .about("An automated equational theorem prover for Boolean algebra")
        .setting(AppSettings::DeriveDisplayOrder)
        .arg(
            Arg::with_name("script-file")
                .required(true)
                .help("The script with the axioms and proof obligations to run"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log")
                .possible_values(&["off", "error", "warn", "info"])
                .default_value("warn")
                .help("Sets the maximum logging level"),
        )
}

fn main() {
    use log::LevelFilter;

    let matches = app().get_matches();
    let level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        _ => unreachable!(),
    };
    logger::init(level);

    if let Err(e) = run_app(&matches) {
        report_error(&matches, &e);
        std::process::exit(1);
    }
}

fn run_app(matches: &ArgMatches) -> Result<(), CliError> {
    // Most of the behaviour lives here instead of in `main` so we can control
    // how errors are printed to the user.
    let path = matches.value_of("script-file").unwrap();
    let file = BufReader::new(File::open(path)?);
    let stdout = io::stdout();
    kea::run_script(file, prover::Config::default(), stdout.lock())?;
    Ok(())
}

fn report_error(matches: &ArgMatches, error: &CliError) {
    // Parse errors get an excerpt of the offending line with a caret under
    // the column; everything else goes through the logger.
    if let CliError::Kea(Error::Parser(inner, position)) = error {
        let path = matches.value_of("script-file").unwrap();
        if print_excerpt(Path::new(path), *position).is_ok() {
            eprintln!(
                "Error (line {}, column {}): {}",
                position.0, position.1, inner
            );
            return;
        }
    }
    log::error!("{}", error);
}

fn print_excerpt(path: &Path, (line, column): Position) -> io::Result<()> {
    let file = BufReader::new(File::open(path)?);
    let text = file
        .lines()
        .nth(line.saturating_sub(1))
        .transpose()?
        .unwrap_or_default();
    eprintln!("{}", text.trim_end());
    eprintln!("{:>width$}", "^", width = column);
    Ok(())
}
