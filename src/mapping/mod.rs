//! Translation Tables
//!
//! Maps the suite's human-readable test parameters onto the names the
//! GStreamer msdk elements expect. Every table is constant data; each lookup
//! is memoized in a process-lifetime [`CacheStore`](crate::cache::CacheStore).
//!
//! A parameter with no mapping yields `None` (or an empty list for
//! subsampling groups). Callers treat that as an unsupported configuration.

mod format;
mod profile;
mod vpp;

pub use format::{map_format, map_format_upper, map_subsampling};
pub use profile::map_profile;
pub use vpp::{map_deinterlace_method, map_vpp_mirroring, map_vpp_rotation, map_vpp_transpose};

/// Linear search over a constant pair table.
fn lookup<K: PartialEq, V: Copy>(table: &[(K, V)], key: &K) -> Option<V> {
    table.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let table = [("a", 1), ("b", 2)];
        assert_eq!(lookup(&table, &"b"), Some(2));
        assert_eq!(lookup(&table, &"z"), None);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let table = [(0, "first"), (0, "second")];
        assert_eq!(lookup(&table, &0), Some("first"));
    }
}
