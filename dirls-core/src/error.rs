use std::collections::TryReserveError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    EntryNotFound(PathBuf),
    NotADirectory(PathBuf),
    CannotOpenDirectory(PathBuf),
    AllocationFailure,
    IoError(std::io::Error),
}

impl Error {
    /// Bad paths only affect the exit status; everything else stops the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            *self,
            Error::EntryNotFound(_) | Error::NotADirectory(_) | Error::CannotOpenDirectory(_)
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::EntryNotFound(ref path) => {
                write!(f, "can not find the entry \"{}\".", path.display())
            }
            Error::NotADirectory(ref path) => {
                write!(f, "the entry \"{}\" is not a directory.", path.display())
            }
            Error::CannotOpenDirectory(ref path) => {
                write!(f, "can not open directory \"{}\".", path.display())
            }
            Error::AllocationFailure => write!(f, "could not allocate enough memory."),
            Error::IoError(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<TryReserveError> for Error {
    fn from(_error: TryReserveError) -> Error {
        Error::AllocationFailure
    }
}
