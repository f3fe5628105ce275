//! Video post-processing parameter tables.
//!
//! Angles are in degrees, clockwise. Mirroring methods are `horizontal` or
//! `vertical`; `None` means no mirroring.

use once_cell::sync::Lazy;

use super::lookup;
use crate::cache::CacheStore;

const MIRRORING: &[(Option<&str>, &str)] = &[
    (None, "identity"),
    (Some("identity"), "identity"),
    (Some("none"), "identity"),
    (Some("horizontal"), "horiz"),
    (Some("vertical"), "vert"),
];

const ROTATION: &[(i32, &str)] = &[(0, "identity"), (90, "90r"), (180, "180"), (270, "90l")];

// Rotation followed by mirroring collapses to one of the eight
// video-direction values.
const TRANSPOSE: &[((i32, Option<&str>), &str)] = &[
    ((0, None), "identity"),
    ((0, Some("vertical")), "vert"),
    ((0, Some("horizontal")), "horiz"),
    ((90, None), "90r"),
    ((90, Some("vertical")), "ur-ll"),
    ((90, Some("horizontal")), "ul-lr"),
    ((180, None), "180"),
    ((180, Some("vertical")), "horiz"),
    ((180, Some("horizontal")), "vert"),
    ((270, None), "90l"),
    ((270, Some("vertical")), "ul-lr"),
    ((270, Some("horizontal")), "ur-ll"),
];

const DEINTERLACE: &[(&str, &str)] = &[
    ("bob", "bob"),
    ("motion-adaptive", "advanced"),
    ("advanced", "advanced"),
    ("advanced-no-ref", "advanced-no-ref"),
    ("advanced-scd", "advanced-scd"),
    ("weave", "field-weave"),
    ("none", "none"),
];

type Translation = Option<&'static str>;

static MIRRORING_CACHE: Lazy<CacheStore<Option<String>, Translation>> =
    Lazy::new(|| CacheStore::new("map_vpp_mirroring"));
static ROTATION_CACHE: Lazy<CacheStore<i32, Translation>> =
    Lazy::new(|| CacheStore::new("map_vpp_rotation"));
static TRANSPOSE_CACHE: Lazy<CacheStore<(i32, Option<String>), Translation>> =
    Lazy::new(|| CacheStore::new("map_vpp_transpose"));
static DEINTERLACE_CACHE: Lazy<CacheStore<String, Translation>> =
    Lazy::new(|| CacheStore::new("map_deinterlace_method"));

/// Translates a mirroring method to the msdkvpp `mirroring` value.
pub fn map_vpp_mirroring(method: Option<&str>) -> Option<&'static str> {
    MIRRORING_CACHE
        .get_or_insert_with(method.map(str::to_string), |m| lookup(MIRRORING, &m.as_deref()))
}

/// Translates a rotation angle to the msdkvpp `rotation` value.
///
/// Only right angles in `0..=270` are mapped.
pub fn map_vpp_rotation(degrees: i32) -> Option<&'static str> {
    ROTATION_CACHE.get_or_insert_with(degrees, |d| lookup(ROTATION, d))
}

/// Translates a rotation plus optional mirroring to a `video-direction` value.
pub fn map_vpp_transpose(degrees: i32, method: Option<&str>) -> Option<&'static str> {
    TRANSPOSE_CACHE.get_or_insert_with((degrees, method.map(str::to_string)), |(d, m)| {
        lookup(TRANSPOSE, &(*d, m.as_deref()))
    })
}

/// Translates a deinterlace method name to the msdkvpp `deinterlace-method` value.
pub fn map_deinterlace_method(method: &str) -> Option<&'static str> {
    DEINTERLACE_CACHE
        .get_or_insert_with(method.to_string(), |m| lookup(DEINTERLACE, &m.as_str()))
}
