//! Directory listing with cached owner and group names.
//!
//! The `lister::Lister` reads a directory through a `platform::FileSystem`, sorts
//! its entries and prints one line per entry. Owner and group ids are turned into
//! names by the `credential::Credentials` cache, which only asks the
//! `identity::IdentityResolver` the first time it sees an id.
//!
//! ```rust,no_run
//! use dirls_core::identity::SystemIdentities;
//! use dirls_core::lister::Lister;
//! use dirls_core::platform::UnixFileSystem;
//! use std::path::Path;
//!
//! fn main() -> dirls_core::error::Result<()> {
//!     let mut lister = Lister::new(UnixFileSystem, SystemIdentities);
//!     let listing = lister.list_directory(Path::new("."), &mut std::io::stdout())?;
//!     println!("{} entries", listing.total);
//!     lister.shutdown();
//!     Ok(())
//! }
//! ```

pub mod credential;
pub mod date;
pub mod entry;
pub mod error;
pub mod format;
pub mod identity;
pub mod lister;
pub mod platform;
