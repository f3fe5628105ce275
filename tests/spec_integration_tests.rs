//! Integration Tests for spec composition and translation
//!
//! Exercises the public API the way test-suite code uses it: load a spec
//! document, compose a context, and translate its parameters.

use gst_msdk_fits::mapping::{
    map_deinterlace_method, map_format, map_format_upper, map_profile, map_subsampling,
    map_vpp_rotation, map_vpp_transpose,
};
use gst_msdk_fits::{load_test_spec, memoize, JsonSpecStore, SpecComposer, SpecStore};
use serde_json::{json, Value};
use std::cell::Cell;

// == Helper Functions ==

fn suite_store() -> JsonSpecStore {
    JsonSpecStore::from_json_str(
        r#"{
            "encode": {
                "avc": {
                    "cqp": { "formats": ["NV12", "I420"], "profile": "high", "qp": [14, 28] },
                    "cbr": { "formats": ["NV12"], "bitrate": 4000 }
                }
            },
            "vpp": {
                "rotate": { "degrees": [0, 90, 180, 270] },
                "deinterlace": { "methods": ["bob", "motion-adaptive", "weave"] }
            },
            "gst-msdk": {
                "encode": {
                    "avc": {
                        "cqp": { "formats": ["NV12"], "lowpower": false }
                    }
                },
                "vpp": {
                    "rotate": { "degrees": [90, 270] }
                }
            }
        }"#,
    )
    .expect("suite document parses")
}

fn strings(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_str().expect("string"))
        .collect()
}

// == Compose Tests ==

#[test]
fn test_component_overrides_general_entries() {
    let store = suite_store();
    let spec = load_test_spec(&store, &["encode", "avc", "cqp"]);

    assert_eq!(strings(&spec["formats"]), vec!["NV12"]);
    assert_eq!(spec["profile"], json!("high"));
    assert_eq!(spec["qp"], json!([14, 28]));
    assert_eq!(spec["lowpower"], json!(false));
    assert_eq!(spec.len(), 4);
}

#[test]
fn test_context_without_component_entries() {
    let store = suite_store();
    let spec = load_test_spec(&store, &["encode", "avc", "cbr"]);
    assert_eq!(
        Value::Object(spec),
        json!({ "formats": ["NV12"], "bitrate": 4000 })
    );
}

#[test]
fn test_unknown_context_composes_empty() {
    let store = suite_store();
    assert!(load_test_spec(&store, &["decode", "av1"]).is_empty());
}

#[test]
fn test_compose_is_idempotent_and_independent() {
    let store = suite_store();
    let composer = SpecComposer::new(&store);

    let mut first = composer.compose(&["vpp", "rotate"]);
    let second = composer.compose(&["vpp", "rotate"]);
    assert_eq!(first, second);

    first["degrees"].as_array_mut().unwrap().clear();
    assert_eq!(second["degrees"], json!([90, 270]));
    assert_eq!(
        store.get_spec(&["gst-msdk", "vpp", "rotate"])["degrees"],
        json!([90, 270])
    );
    assert_eq!(
        store.get_spec(&["vpp", "rotate"])["degrees"],
        json!([0, 90, 180, 270])
    );
}

// == Translation Tests ==

#[test]
fn test_composed_parameters_translate() {
    let store = suite_store();

    let cqp = load_test_spec(&store, &["encode", "avc", "cqp"]);
    let caps: Vec<_> = strings(&cqp["formats"])
        .into_iter()
        .map(|f| map_format(f))
        .collect();
    assert_eq!(caps, vec![Some("nv12")]);
    assert_eq!(
        map_profile("avc", cqp["profile"].as_str().unwrap()),
        Some("high")
    );

    let rotate = load_test_spec(&store, &["vpp", "rotate"]);
    let rotations: Vec<_> = rotate["degrees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| map_vpp_rotation(d.as_i64().unwrap() as i32))
        .collect();
    assert_eq!(rotations, vec![Some("90r"), Some("90l")]);

    let deinterlace = load_test_spec(&store, &["vpp", "deinterlace"]);
    let methods: Vec<_> = strings(&deinterlace["methods"])
        .into_iter()
        .map(map_deinterlace_method)
        .collect();
    assert_eq!(
        methods,
        vec![Some("bob"), Some("advanced"), Some("field-weave")]
    );
}

#[test]
fn test_subsampling_group_formats() {
    let supported: Vec<_> = map_subsampling("FORMATS_420")
        .iter()
        .filter_map(|f| map_format_upper(f))
        .collect();
    assert_eq!(supported, vec!["I420", "NV12", "YV12"]);

    // 422V has no msdk format, so the 422 group narrows
    let supported: Vec<_> = map_subsampling("FORMATS_422")
        .iter()
        .filter_map(|f| map_format(f))
        .collect();
    assert_eq!(supported, vec!["y42b", "yuy2"]);
}

#[test]
fn test_rotation_table_through_user_cache() {
    // Wrapping an already memoized table again must not change its answers
    let evaluations = Cell::new(0);
    let rotation = memoize("rotation", |&(d,): &(i32,)| {
        evaluations.set(evaluations.get() + 1);
        map_vpp_rotation(d)
    });

    for _ in 0..3 {
        assert_eq!(rotation.call((0,)), Some("identity"));
        assert_eq!(rotation.call((90,)), Some("90r"));
        assert_eq!(rotation.call((180,)), Some("180"));
        assert_eq!(rotation.call((270,)), Some("90l"));
        assert_eq!(rotation.call((45,)), None);
    }
    assert_eq!(evaluations.get(), 5);
    assert_eq!(rotation.stats().hits, 10);
}

#[test]
fn test_transpose_video_direction() {
    assert_eq!(map_vpp_transpose(90, Some("horizontal")), Some("ul-lr"));
    assert_eq!(map_vpp_transpose(270, Some("horizontal")), Some("ur-ll"));
    assert_eq!(map_vpp_transpose(360, None), None);
}
