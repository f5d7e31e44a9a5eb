//! Identity lookups
//! ----------------
//!
//! Turns the numeric owner and group ids found in file metadata into names. The
//! lookups hit the system databases, so the listing goes through the credential
//! cache (`crate::credential`) instead of calling these directly per entry.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKind::User => write!(f, "user"),
            IdentityKind::Group => write!(f, "group"),
        }
    }
}

/// Resolves an id of the given kind to its name.
///
/// `None` means the id has no entry in the identity database (e.g. a file owned by
/// a deleted user). That is a normal outcome, not a failure.
pub trait IdentityResolver {
    fn lookup(&self, kind: IdentityKind, id: u32) -> Option<String>;
}

impl<T: IdentityResolver + ?Sized> IdentityResolver for &T {
    fn lookup(&self, kind: IdentityKind, id: u32) -> Option<String> {
        (**self).lookup(kind, id)
    }
}

/// Looks ids up in the passwd and group databases.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentities;

#[cfg(unix)]
impl IdentityResolver for SystemIdentities {
    fn lookup(&self, kind: IdentityKind, id: u32) -> Option<String> {
        match kind {
            IdentityKind::User => users::get_user_by_uid(id)
                .map(|user| user.name().to_string_lossy().into_owned()),
            IdentityKind::Group => users::get_group_by_gid(id)
                .map(|group| group.name().to_string_lossy().into_owned()),
        }
    }
}
