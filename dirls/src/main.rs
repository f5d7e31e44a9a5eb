extern crate dirls;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use dirls::cli::PROGRAM_LICENSE;
use dirls::utils;
use dirls_core::identity::SystemIdentities;
use dirls_core::lister::Lister;
use dirls_core::platform::UnixFileSystem;

fn main() -> ExitCode {
    let matches = dirls::cli::parse_flags();

    utils::initialize_debug_from_args(&matches);

    if matches.is_present("license") {
        println!("{}", PROGRAM_LICENSE);
        return ExitCode::SUCCESS;
    }

    let paths: Vec<&Path> = match matches.values_of_os("PATH") {
        Some(values) => values.map(Path::new).collect(),
        None => vec![Path::new(".")],
    };

    let mut lister = Lister::new(UnixFileSystem, SystemIdentities);
    let result = dirls::listing::list_paths(&mut lister, &paths, &mut io::stdout().lock());
    lister.shutdown();

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            utils::write_error(&err);
            ExitCode::FAILURE
        }
    }
}
