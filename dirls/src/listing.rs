use std::io::Write;
use std::path::Path;

use dirls_core::identity::IdentityResolver;
use dirls_core::lister::Lister;
use dirls_core::platform::FileSystem;

use crate::error::Result;
use crate::utils;

/// Lists every path in order.
///
/// Paths that cannot be listed are reported and skipped; the return value tells
/// whether all of them were listed. Any other failure stops the run.
pub fn list_paths<F, R, W>(lister: &mut Lister<F, R>, paths: &[&Path], out: &mut W) -> Result<bool>
where
    F: FileSystem,
    R: IdentityResolver,
    W: Write,
{
    let mut all_listed = true;
    for path in paths {
        match lister.list_directory(path, out) {
            Ok(listing) => log::debug!(
                "listed {} entries of {:?}",
                listing.total,
                listing.absolute_path
            ),
            Err(err) if err.is_recoverable() => {
                utils::write_error(&err);
                all_listed = false;
            }
            Err(err) => return Err(err.into()),
        }
    }
    out.flush()?;
    Ok(all_listed)
}
