//! Codec profile table.

use once_cell::sync::Lazy;

use super::lookup;
use crate::cache::CacheStore;

type ProfileTable = &'static [(&'static str, &'static str)];

const PROFILES: &[(&str, ProfileTable)] = &[
    (
        "avc",
        &[
            ("high", "high"),
            ("main", "main"),
            ("baseline", "baseline"),
            ("constrained-baseline", "constrained-baseline"),
        ],
    ),
    ("hevc-8", &[("main", "main")]),
    ("hevc-10", &[("main10", "main-10")]),
    ("jpeg", &[("baseline", "baseline")]),
    (
        "mpeg2",
        &[("high", "high"), ("main", "main"), ("simple", "simple")],
    ),
    ("vp8", &[("version0_3", "version0_3")]),
];

static PROFILE_CACHE: Lazy<CacheStore<(String, String), Option<&'static str>>> =
    Lazy::new(|| CacheStore::new("map_profile"));

/// Translates a codec's suite profile name to the encoder caps profile.
///
/// Returns `None` when either the codec or the profile is unknown.
pub fn map_profile(codec: &str, profile: &str) -> Option<&'static str> {
    PROFILE_CACHE.get_or_insert_with((codec.to_string(), profile.to_string()), |(c, p)| {
        lookup(PROFILES, &c.as_str()).and_then(|profiles| lookup(profiles, &p.as_str()))
    })
}
