use std::ffi::OsString;

// POSIX file type bits, kept here so decoding does not depend on the host.
pub const S_IFMT: u32 = 0o170000;
pub const S_IFSOCK: u32 = 0o140000;
pub const S_IFLNK: u32 = 0o120000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFBLK: u32 = 0o060000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFCHR: u32 = 0o020000;
pub const S_IFIFO: u32 = 0o010000;

pub const PERMISSION_BITS: u32 = 0o777;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharacterDevice,
    Fifo,
    Socket,
    Unknown,
}

impl From<u32> for EntryKind {
    fn from(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFREG => EntryKind::Regular,
            S_IFDIR => EntryKind::Directory,
            S_IFLNK => EntryKind::Symlink,
            S_IFBLK => EntryKind::BlockDevice,
            S_IFCHR => EntryKind::CharacterDevice,
            S_IFIFO => EntryKind::Fifo,
            S_IFSOCK => EntryKind::Socket,
            _ => EntryKind::Unknown,
        }
    }
}

impl EntryKind {
    /// First character of the mode string.
    pub fn symbol(self) -> char {
        match self {
            EntryKind::Regular => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharacterDevice => 'c',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::Unknown => '?',
        }
    }
}

/// What the listing needs from a stat of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub size: u64,
    pub mode: u32,
    pub owner_id: u32,
    pub group_id: u32,
    /// Seconds since the Unix epoch.
    pub modified: i64,
}

impl EntryMetadata {
    pub fn kind(&self) -> EntryKind {
        EntryKind::from(self.mode)
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    pub fn permissions(&self) -> u32 {
        self.mode & PERMISSION_BITS
    }
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub name: OsString,
    pub metadata: EntryMetadata,
}

/// `.` and `..`, which every directory lists for itself.
pub fn is_pseudo_entry(name: &std::ffi::OsStr) -> bool {
    name == "." || name == ".."
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_kind_from_mode() {
        assert_eq!(EntryKind::from(S_IFREG | 0o644), EntryKind::Regular);
        assert_eq!(EntryKind::from(S_IFDIR | 0o755), EntryKind::Directory);
        assert_eq!(EntryKind::from(S_IFLNK | 0o777), EntryKind::Symlink);
        assert_eq!(EntryKind::from(S_IFBLK | 0o660), EntryKind::BlockDevice);
        assert_eq!(EntryKind::from(S_IFCHR | 0o620), EntryKind::CharacterDevice);
        assert_eq!(EntryKind::from(S_IFIFO | 0o600), EntryKind::Fifo);
        assert_eq!(EntryKind::from(S_IFSOCK | 0o755), EntryKind::Socket);
        assert_eq!(EntryKind::from(0o644), EntryKind::Unknown);
    }

    #[test]
    fn test_permissions_strip_type_bits() {
        let metadata = EntryMetadata {
            size: 0,
            mode: S_IFDIR | 0o4755,
            owner_id: 0,
            group_id: 0,
            modified: 0,
        };
        assert!(metadata.is_dir());
        assert_eq!(metadata.permissions(), 0o755);
    }

    #[test]
    fn test_pseudo_entries() {
        assert!(is_pseudo_entry(OsStr::new(".")));
        assert!(is_pseudo_entry(OsStr::new("..")));
        assert!(!is_pseudo_entry(OsStr::new("...")));
        assert!(!is_pseudo_entry(OsStr::new(".hidden")));
        assert!(!is_pseudo_entry(OsStr::new("..a")));
    }
}
