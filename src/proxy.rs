use std::sync::atomic::{AtomicUsize, Ordering};

/// Cyclic proxy assignment for worker spawns.
///
/// The cursor advances atomically, so concurrent spawns may at worst receive
/// duplicate assignments; the list itself is never mutated after
/// construction. Proxy strings are not validated here; a bad URI surfaces
/// later as failed attempts for the worker holding it.
#[derive(Debug)]
pub struct ProxyRotator {
    proxies: Vec<String>,
    cursor: AtomicUsize,
}

impl ProxyRotator {
    #[must_use]
    pub const fn new(proxies: Vec<String>) -> Self {
        Self {
            proxies,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Next assignment in round-robin order; `None` when no proxies are
    /// configured.
    #[must_use]
    pub fn next_proxy(&self) -> Option<String> {
        if self.proxies.is_empty() {
            return None;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed);
        let index = position.checked_rem(self.proxies.len()).unwrap_or(0);
        self.proxies.get(index).cloned()
    }
}
