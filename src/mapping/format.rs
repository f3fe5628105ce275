//! Pixel format and chroma subsampling tables.

use once_cell::sync::Lazy;

use super::lookup;
use crate::cache::CacheStore;

const SUBSAMPLING_GROUPS: &[(&str, &[&str])] = &[
    ("FORMATS_400", &["Y800"]),
    ("FORMATS_420", &["I420", "NV12", "YV12"]),
    ("FORMATS_422", &["422H", "422V", "YUY2"]),
    ("FORMATS_444", &["444P", "AYUV"]),
];

// Lower-case caps names, as used in `video/x-raw,format=...` strings.
const CAPS_FORMATS: &[(&str, &str)] = &[
    ("I420", "i420"),
    ("NV12", "nv12"),
    ("YV12", "yv12"),
    ("P010", "p010-10le"),
    ("AYUV", "ayuv"),
    ("YUY2", "yuy2"),
    ("ARGB", "argb"),
    ("BGRA", "bgra"),
    ("422H", "y42b"),
    ("444P", "y444"),
    ("P210", "i422_10le"),
    ("P410", "y444_10le"),
];

// GstVideoFormat names.
const VIDEO_FORMATS: &[(&str, &str)] = &[
    ("I420", "I420"),
    ("NV12", "NV12"),
    ("YV12", "YV12"),
    ("P010", "P010_10LE"),
    ("AYUV", "AYUV"),
    ("YUY2", "YUY2"),
    ("ARGB", "ARGB"),
    ("BGRA", "BGRA"),
    ("422H", "Y42B"),
    ("444P", "Y444"),
    ("P210", "I422_10LE"),
    ("P410", "Y444_10LE"),
];

static SUBSAMPLING_CACHE: Lazy<CacheStore<String, &'static [&'static str]>> =
    Lazy::new(|| CacheStore::new("map_subsampling"));
static CAPS_FORMAT_CACHE: Lazy<CacheStore<String, Option<&'static str>>> =
    Lazy::new(|| CacheStore::new("map_format"));
static VIDEO_FORMAT_CACHE: Lazy<CacheStore<String, Option<&'static str>>> =
    Lazy::new(|| CacheStore::new("map_format_upper"));

/// Returns the suite formats belonging to a subsampling group such as
/// `FORMATS_420`. Unknown groups yield an empty list.
pub fn map_subsampling(group: &str) -> &'static [&'static str] {
    SUBSAMPLING_CACHE.get_or_insert_with(group.to_string(), |g| {
        lookup(SUBSAMPLING_GROUPS, &g.as_str()).unwrap_or(&[])
    })
}

/// Translates a suite format (`P010`) to its caps name (`p010-10le`).
pub fn map_format(format: &str) -> Option<&'static str> {
    CAPS_FORMAT_CACHE
        .get_or_insert_with(format.to_string(), |f| lookup(CAPS_FORMATS, &f.as_str()))
}

/// Translates a suite format (`P010`) to its GstVideoFormat name (`P010_10LE`).
pub fn map_format_upper(format: &str) -> Option<&'static str> {
    VIDEO_FORMAT_CACHE
        .get_or_insert_with(format.to_string(), |f| lookup(VIDEO_FORMATS, &f.as_str()))
}
