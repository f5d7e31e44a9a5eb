use std::ffi::OsString;

pub const PROGRAM_NAME: &str = "dirls";
pub const PROGRAM_LICENSE: &str = "Copyright (c) 2024, Sherman Rofeman. BSD-3-Clause License.";

/// `v2.0.0 (compiled for Linux x86_64)`
pub fn version_text() -> String {
    format!(
        "v{} (compiled for {} {})",
        clap::crate_version!(),
        platform_name(),
        std::env::consts::ARCH
    )
}

fn platform_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Apple",
        "windows" => "Windows",
        other => other,
    }
}

fn build_app<'a, 'b>(version: &'b str) -> clap::App<'a, 'b> {
    clap::App::new(PROGRAM_NAME)
        .version(version)
        .author(clap::crate_authors!())
        .about(
            "List the entries inside of directories given their paths as arguments. If no \
             directory is given, it will consider the current directory.\n\n\
             For each entry, it shows its index, user and group, modified date, size (if it is \
             not a directory), type and permissions mode (read (r), write (w) and execute (x) \
             for user, group and others) with its octal value, and name.",
        )
        .arg(clap::Arg::from_usage("--debug 'Enable debug output'"))
        .arg(clap::Arg::from_usage("--license 'Prints its copyright notice'"))
        .arg(clap::Arg::from_usage(
            "[PATH]... 'Directories to list (defaults to the current directory)'",
        ))
}

/// Arguments taken as flags; any other argument is a path, even one starting with
/// a hyphen.
const FLAGS: [&str; 6] = ["--help", "-h", "--version", "-V", "--license", "--debug"];

/// Moves the flags in front of a `--` separator so clap sees every other argument
/// as a `PATH` value.
fn separate_paths<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut separated: Vec<OsString> = args.next().into_iter().collect();
    let mut paths = Vec::new();
    for arg in args {
        if FLAGS.iter().any(|flag| arg == *flag) {
            separated.push(arg);
        } else {
            paths.push(arg);
        }
    }
    separated.push(OsString::from("--"));
    separated.extend(paths);
    separated
}

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    let version = version_text();
    build_app(&version).get_matches_from(separate_paths(std::env::args_os()))
}

pub fn parse_flags_from<'a, I, T>(args: I) -> clap::Result<clap::ArgMatches<'a>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let version = version_text();
    build_app(&version).get_matches_from_safe(separate_paths(args))
}
