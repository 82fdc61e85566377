//! Who may overwrite the news.

use std::collections::HashSet;

/// The user invoking a command, reduced to what authorization needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: u64,
    /// Whether the caller holds the server administrator permission.
    pub is_administrator: bool,
}

/// Grants updates to server administrators and to an allow-list of user ids.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    allow_list: HashSet<u64>,
}

impl AdminPolicy {
    pub fn new(allow_list: impl IntoIterator<Item = u64>) -> Self {
        Self {
            allow_list: allow_list.into_iter().collect(),
        }
    }

    pub fn permits(&self, caller: &Caller) -> bool {
        caller.is_administrator || self.allow_list.contains(&caller.id)
    }
}
