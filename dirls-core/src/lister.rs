//! Directory listing
//! -----------------
//!
//! A listing of one directory looks like this:
//!
//! ```text
//! Index  User      Group     Modified Date         Size      Mode              Name
//! -----  --------  --------  --------------------  --------  ----------------  ----------------------------
//!     1  alice     staff     16th Oct 2026 14h05m  1.5kB     -rw-r--r-- (644)  notes.txt
//!     2  alice     staff     02nd Sep 2026 09h12m  -         drwxr-xr-x (755)  src
//! ---------------------------------------------------------------------------------------------------------
//! Directory: "/home/alice/project".
//!     Total: 2 entries.
//! ```
//!
//! Entries are sorted byte-wise by name, so upper case names come before lower
//! case ones. Owner and group names come from the `Credentials` owned by the
//! `Lister`, which lives for the whole run so every directory shares the cache.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::credential::Credentials;
use crate::date::ModifiedDate;
use crate::entry::{is_pseudo_entry, Entry};
use crate::error::{Error, Result};
use crate::format::{format_mode, format_permissions_octal, format_size};
use crate::identity::IdentityResolver;
use crate::platform::FileSystem;

const RULE: &str = "-----  --------  --------  --------------------  --------  ----------------  \
                    ----------------------------";
const EMPTY_INDICATOR: &str = "Directory Is Empty";

/// Outcome of listing one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub absolute_path: PathBuf,
    pub total: usize,
}

pub struct Lister<F, R> {
    filesystem: F,
    resolver: R,
    credentials: Credentials,
}

impl<F: FileSystem, R: IdentityResolver> Lister<F, R> {
    pub fn new(filesystem: F, resolver: R) -> Lister<F, R> {
        Lister {
            filesystem,
            resolver,
            credentials: Credentials::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Writes the listing of `path` to `out`.
    ///
    /// A path that cannot be listed returns one of the recoverable errors before
    /// anything is written.
    pub fn list_directory<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<Listing> {
        log::debug!("listing {:?}", path);
        let mut names = self.filesystem.read_entry_names(path)?;
        names.retain(|name| !is_pseudo_entry(name));
        names.sort_unstable();

        let entries = self.collect_entries(path, names)?;

        writeln!(
            out,
            "Index  {:<8}  {:<8}  {:<20}  {:<8}  {:<16}  Name",
            "User", "Group", "Modified Date", "Size", "Mode"
        )?;
        writeln!(out, "{RULE}")?;
        for (index, entry) in entries.iter().enumerate() {
            self.write_entry(out, index + 1, entry)?;
        }
        if entries.is_empty() {
            let width = (RULE.len() + EMPTY_INDICATOR.len()) / 2;
            writeln!(out, "{EMPTY_INDICATOR:>width$}")?;
        }
        writeln!(out, "{}", "-".repeat(RULE.len()))?;

        let absolute_path = match self.filesystem.absolute_path(path) {
            Ok(absolute_path) => absolute_path,
            Err(err) => {
                log::debug!("could not resolve absolute path of {:?}: {}", path, err);
                path.to_path_buf()
            }
        };
        writeln!(out, "Directory: \"{}\".", absolute_path.display())?;
        writeln!(out, "    Total: {}.", describe_total(entries.len()))?;

        Ok(Listing {
            absolute_path,
            total: entries.len(),
        })
    }

    /// Tears down both credential trees, returning how many names were cached.
    pub fn shutdown(mut self) -> usize {
        let released = self.credentials.teardown();
        log::debug!("released {} cached credentials", released);
        released
    }

    /// Stats every name; the ones that vanished since the read are skipped.
    ///
    /// A directory whose names can be read but none of them stat'ed (read without
    /// search permission) cannot be listed.
    fn collect_entries(&self, path: &Path, names: Vec<OsString>) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(names.len())?;
        let enumerated = names.len();
        for name in names {
            let entry_path = path.join(&name);
            match self.filesystem.metadata(&entry_path) {
                Ok(metadata) => entries.push(Entry { name, metadata }),
                // Removed between reading the directory and the stat.
                Err(err) => log::warn!("skipping {:?}: {}", entry_path, err),
            }
        }
        if enumerated > 0 && entries.is_empty() {
            return Err(Error::CannotOpenDirectory(path.to_path_buf()));
        }
        Ok(entries)
    }

    fn write_entry<W: Write>(&mut self, out: &mut W, index: usize, entry: &Entry) -> Result<()> {
        let metadata = &entry.metadata;
        let user = self.credentials.user_name(metadata.owner_id, &self.resolver);
        let group = self.credentials.group_name(metadata.group_id, &self.resolver);
        let mode = format!(
            "{} ({})",
            format_mode(metadata.mode),
            format_permissions_octal(metadata.mode)
        );
        writeln!(
            out,
            "{:>5}  {:<8}  {:<8}  {:<20}  {:<8}  {:<16}  {}",
            index,
            user,
            group,
            ModifiedDate::new(metadata.modified).to_string(),
            format_size(metadata.kind(), metadata.size),
            mode,
            entry.name.to_string_lossy()
        )?;
        Ok(())
    }
}

fn describe_total(total: usize) -> String {
    match total {
        0 => "no entries".to_string(),
        1 => "1 entry".to_string(),
        n => format!("{n} entries"),
    }
}
