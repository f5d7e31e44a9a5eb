use std::fmt::Display;
use std::io::Write;

use crate::cli::PROGRAM_NAME;

/// Sets up logging on standard error; `--debug` lowers the level to debug.
pub fn initialize_debug_from_args(matches: &clap::ArgMatches) {
    let level = if matches.is_present("debug") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}: {}", PROGRAM_NAME, record.args()))
        .init();
}

/// Prints a diagnostic on standard error, prefixed with the program name.
pub fn write_error<E: Display + ?Sized>(error: &E) {
    eprintln!("{}: {}", PROGRAM_NAME, error);
}
