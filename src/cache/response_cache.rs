use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry {
    value: String,
    stored_at: Instant,
}

/// In-process TTL cache for pre-serialized response bodies.
///
/// Entries expire passively: a read past the TTL drops the entry and reports
/// a miss. Check-then-set is not atomic across a miss, so two concurrent
/// misses may both recompute; the later `set` wins, which is harmless here.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert_eq!(cache.get("stats"), None);

        cache.set("stats", "{\"total_notes\":3}".to_string());
        assert_eq!(cache.get("stats"), Some("{\"total_notes\":3}".to_string()));
    }

    #[test]
    fn entry_expires_after_ttl() {
        let cache = ResponseCache::new(Duration::from_millis(20));
        cache.set("stats", "old".to_string());
        assert_eq!(cache.get("stats"), Some("old".to_string()));

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("stats"), None);
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.set("stats", "old".to_string());
        cache.set("stats", "new".to_string());
        assert_eq!(cache.get("stats"), Some("new".to_string()));
    }

    #[test]
    fn zero_ttl_disables_caching() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.set("stats", "value".to_string());
        assert_eq!(cache.get("stats"), None);
    }
}
