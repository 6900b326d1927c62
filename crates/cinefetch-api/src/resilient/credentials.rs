//! Credential pool with a circular rotation cursor.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};

/// Ordered, non-empty set of interchangeable API keys.
///
/// The cursor is shared by every request made through the owning client,
/// so consecutive requests keep rotating instead of restarting at the
/// first key.
pub struct CredentialPool {
    /// Keys in the order they were configured.
    keys: Vec<String>,
    /// Index of the key used for the next attempt.
    cursor: AtomicUsize,
}

impl CredentialPool {
    /// Creates a pool from the given keys. Blank entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if no non-blank key remains.
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<String> = keys
            .into_iter()
            .map(|k| String::from(k.as_ref().trim()))
            .filter(|k| !k.is_empty())
            .collect();

        if keys.is_empty() {
            bail!("credential pool requires at least one API key");
        }

        Ok(Self {
            keys,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Number of keys in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; construction rejects empty pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.load(Ordering::Relaxed) % self.keys.len()
    }

    /// Returns the cursor position together with the key stored there.
    #[must_use]
    pub fn current(&self) -> (usize, &str) {
        let index = self.position();
        let key = self.keys.get(index).map_or("", String::as_str);
        (index, key)
    }

    /// The key at `index`, wrapping modulo the pool size.
    #[must_use]
    pub fn key(&self, index: usize) -> &str {
        self.keys
            .get(index % self.keys.len())
            .map_or("", String::as_str)
    }

    /// Records that the key at `used` failed and returns the index to try next.
    ///
    /// The shared cursor only moves when it still points at `used`, so
    /// concurrent requests that fail on the same key advance it once and a
    /// request never steps back onto a key it has just seen fail.
    pub fn advance_from(&self, used: usize) -> usize {
        let len = self.keys.len();
        let used = used % len;
        let next = used.wrapping_add(1) % len;
        let _ = self
            .cursor
            .compare_exchange(used, next, Ordering::Relaxed, Ordering::Relaxed);
        next
    }

    /// Moves the cursor to the next key, wrapping at the end. Returns the new position.
    pub fn advance(&self) -> usize {
        let len = self.keys.len();
        let previous = self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |pos| {
                Some(pos.wrapping_add(1) % len)
            })
            .unwrap_or_default();
        previous.wrapping_add(1) % len
    }
}

// Keys are secrets; only the shape is printed.
impl fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPool")
            .field("len", &self.keys.len())
            .field("position", &self.position())
            .finish()
    }
}
