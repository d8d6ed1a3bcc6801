use digest::Digest;
use md5::Md5;
use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

/// 128-bit digest of a downloaded payload, used only as a dedup key
/// within one run.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    pub fn of(data: &[u8]) -> Self {
        Self(Md5::digest(data).into())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", hex::encode(self.0))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Registry of content hashes already admitted for writing during the
/// current run. Shared across all workers, discarded at run end.
#[derive(Debug, Default)]
pub struct DedupStore {
    seen: Mutex<HashSet<ContentHash>>,
}

impl DedupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hash` and reports whether it was new. Check and insert
    /// happen in one critical section: two workers racing on the same
    /// hash cannot both be told to write.
    pub fn check_and_insert(&self, hash: ContentHash) -> bool {
        self.seen.lock().expect("dedup lock poisoned").insert(hash)
    }

    pub fn len(&self) -> usize {
        self.seen.lock().expect("dedup lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
