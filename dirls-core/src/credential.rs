//! Credential cache
//! ----------------
//!
//! Listing a directory needs the owner and group name of every entry, but a
//! directory usually holds thousands of files owned by a handful of users. Each id
//! is therefore resolved once and kept in a binary search tree for the rest of the
//! run.
//!
//! The tree is plain: keyed by id, no rebalancing, no eviction. A
//! strictly increasing insertion order degrades it into a chain, which only makes
//! lookups slower. Teardown walks the tree with an explicit stack so even a chain
//! is released without deep recursion.
//!
//! ```rust
//! use dirls_core::credential::CredentialTree;
//! use dirls_core::identity::{IdentityKind, IdentityResolver};
//!
//! struct Fixed;
//!
//! impl IdentityResolver for Fixed {
//!     fn lookup(&self, _kind: IdentityKind, id: u32) -> Option<String> {
//!         (id == 1000).then(|| "alice".to_string())
//!     }
//! }
//!
//! let mut users = CredentialTree::new(IdentityKind::User);
//! assert_eq!(users.resolve(1000, &Fixed), Some("alice"));
//! assert_eq!(users.resolve(1001, &Fixed), None);
//! assert_eq!(users.len(), 1);
//! assert_eq!(users.clear(), 1);
//! ```

use std::cmp::Ordering;

use crate::identity::{IdentityKind, IdentityResolver};

type Link = Option<Box<Credential>>;

/// A resolved id and its name. Each node owns both of its children.
#[derive(Debug)]
struct Credential {
    id: u32,
    name: String,
    lower: Link,
    higher: Link,
}

impl Credential {
    fn new(id: u32, name: String) -> Credential {
        Credential {
            id,
            name,
            lower: None,
            higher: None,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn child_toward(&mut self, id: u32) -> &mut Link {
        if id < self.id {
            &mut self.lower
        } else {
            &mut self.higher
        }
    }
}

/// Binary search tree of credentials of a single kind.
#[derive(Debug)]
pub struct CredentialTree {
    kind: IdentityKind,
    root: Link,
    len: usize,
}

impl CredentialTree {
    pub fn new(kind: IdentityKind) -> CredentialTree {
        CredentialTree {
            kind,
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks `id` up without ever asking the resolver.
    pub fn get(&self, id: u32) -> Option<&str> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(&node.id) {
                Ordering::Equal => return Some(&node.name),
                Ordering::Less => node.lower.as_deref(),
                Ordering::Greater => node.higher.as_deref(),
            };
        }
        None
    }

    /// Returns the name for `id`, asking `resolver` only if the id was never
    /// resolved before.
    ///
    /// An id unknown to the resolver yields `None` and is not cached.
    pub fn resolve<R>(&mut self, id: u32, resolver: &R) -> Option<&str>
    where
        R: IdentityResolver + ?Sized,
    {
        let kind = self.kind;
        let slot = find_slot(&mut self.root, id);
        if slot.is_none() {
            let name = match resolver.lookup(kind, id) {
                Some(name) => name,
                None => {
                    log::debug!("{kind} id {id} has no name");
                    return None;
                }
            };
            log::debug!("{kind} id {id} resolved to {name:?}");
            *slot = Some(Box::new(Credential::new(id, name)));
            self.len += 1;
        }
        slot.as_deref().map(Credential::name)
    }

    /// Height of the tree; equals `len()` for a fully degenerate tree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Credential, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            for child in [node.lower.as_deref(), node.higher.as_deref()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Cached ids in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids = Vec::with_capacity(self.len);
        let mut pending: Vec<&Credential> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.lower.as_deref();
            }
            match pending.pop() {
                Some(node) => {
                    ids.push(node.id);
                    current = node.higher.as_deref();
                }
                None => break,
            }
        }
        ids
    }

    /// Releases every node, children before their parent, and returns how many
    /// were released. Calling it on an empty tree does nothing.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut pending: Vec<Box<Credential>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            let lower = node.lower.take();
            let higher = node.higher.take();
            if lower.is_none() && higher.is_none() {
                drop(node);
                released += 1;
            } else {
                pending.push(node);
                pending.extend(lower);
                pending.extend(higher);
            }
        }
        self.len = 0;
        released
    }
}

impl Drop for CredentialTree {
    fn drop(&mut self) {
        self.clear();
    }
}

fn find_slot(mut slot: &mut Link, id: u32) -> &mut Link {
    while slot.as_ref().is_some_and(|node| node.id != id) {
        slot = match slot {
            Some(node) => node.child_toward(id),
            None => break,
        };
    }
    slot
}

/// The user and group trees used for one run.
#[derive(Debug)]
pub struct Credentials {
    users: CredentialTree,
    groups: CredentialTree,
}

impl Credentials {
    pub fn new() -> Credentials {
        Credentials {
            users: CredentialTree::new(IdentityKind::User),
            groups: CredentialTree::new(IdentityKind::Group),
        }
    }

    pub fn users(&self) -> &CredentialTree {
        &self.users
    }

    pub fn groups(&self) -> &CredentialTree {
        &self.groups
    }

    /// Name of the user `uid`, or the id itself when it has no name.
    pub fn user_name<R>(&mut self, uid: u32, resolver: &R) -> String
    where
        R: IdentityResolver + ?Sized,
    {
        self.users
            .resolve(uid, resolver)
            .map_or_else(|| uid.to_string(), str::to_owned)
    }

    /// Name of the group `gid`, or the id itself when it has no name.
    pub fn group_name<R>(&mut self, gid: u32, resolver: &R) -> String
    where
        R: IdentityResolver + ?Sized,
    {
        self.groups
            .resolve(gid, resolver)
            .map_or_else(|| gid.to_string(), str::to_owned)
    }

    pub fn teardown(&mut self) -> usize {
        self.users.clear() + self.groups.clear()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::new()
    }
}
