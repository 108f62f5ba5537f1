pub mod fixtures;

use fixtures::*;
use serde_json::json;
use tessera_kernel::options::OptionsError;
use tessera_kernel::prelude::*;

fn provided(value: serde_json::Value) -> SliderOptionsPatch {
    serde_json::from_value(value).expect("valid slider patch")
}

#[test]
fn test_defaults_fill_every_optional_field() {
    let slider = SliderOptions::optionize(&provided(json!({
        "name": "volume",
        "thumbOptions": { "label": "Vol" }
    })))
    .unwrap();

    assert_eq!(slider.width, 100.0);
    assert_eq!(slider.name, "volume");
    assert!(slider.tags.is_empty());
    assert_eq!(slider.track_options, TrackOptions { height: 4, color: "gray".into() });
    assert_eq!(slider.thumb_options, ThumbOptions { label: "Vol".into(), visible: false });
}

#[test]
fn test_nested_options_are_merged_not_replaced() {
    let slider = SliderOptions::optionize(&provided(json!({
        "name": "balance",
        "trackOptions": { "color": "blue" },
        "thumbOptions": { "label": "Bal", "visible": true }
    })))
    .unwrap();

    assert_eq!(slider.track_options.color, "blue");
    assert_eq!(slider.track_options.height, 4, "Unset nested keys keep their defaults");
    assert!(slider.thumb_options.visible);
}

#[test]
fn test_missing_required_fields_are_reported() {
    let err = SliderOptions::optionize(&provided(json!({ "thumbOptions": { "label": "x" } }))).unwrap_err();
    assert!(matches!(err, OptionsError::MissingRequired { ref field, .. } if field == "name"));

    let err = SliderOptions::optionize(&provided(json!({ "name": "x" }))).unwrap_err();
    assert_eq!(err.to_string(), "Missing required option: thumb_options.label");
}

#[test]
fn test_required_fields_never_appear_in_defaults() {
    let defaults = SliderOptions::defaults();
    assert!(defaults.name.is_none());
    assert!(defaults.thumb_options.as_ref().is_some_and(|thumb| thumb.label.is_none()));
    assert_eq!(defaults.width, Some(100.0));
}

#[test]
fn test_custom_defaults_layer() {
    let mut defaults = SliderOptions::defaults();
    defaults.width = Some(320.0);
    defaults.tags = Some(vec!["wide".into()]);

    let slider =
        SliderOptions::optionize_with(&defaults, &provided(json!({ "name": "n", "thumbOptions": { "label": "l" } }))).unwrap();
    assert_eq!(slider.width, 320.0);
    assert_eq!(slider.tags, ["wide"]);
}

#[test]
fn test_non_nested_values_are_atomic() {
    let mut defaults = SliderOptions::defaults();
    defaults.tags = Some(vec!["a".into(), "b".into()]);

    let slider = SliderOptions::optionize_with(
        &defaults,
        &provided(json!({ "name": "n", "tags": ["c"], "thumbOptions": { "label": "l" } })),
    )
    .unwrap();
    assert_eq!(slider.tags, ["c"]);
}

#[test]
fn test_optionize_json_rejects_malformed_documents() {
    let err = SliderOptions::optionize_json(&json!({ "width": "wide" })).unwrap_err();
    assert!(matches!(err, OptionsError::Deserialize { .. }));

    let slider = SliderOptions::optionize_json(&json!({ "name": "n", "thumbOptions": { "label": "l" } })).unwrap();
    assert_eq!(slider.name, "n");
}

#[test]
fn test_optionize_json_layers_over_defaults() {
    let err = SliderOptions::optionize_json(&json!({ "name": "n", "trackOptions": 5 })).unwrap_err();
    assert!(matches!(err, OptionsError::Merge { .. }));
    assert!(err.to_string().contains("sources[0].trackOptions is a number"));

    let slider = SliderOptions::optionize_json(&json!({
        "name": "n",
        "trackOptions": null,
        "thumbOptions": { "label": "l" }
    }))
    .unwrap();
    assert_eq!(slider.track_options.height, 4);
    assert_eq!(slider.track_options.color, "gray");
}

#[test]
fn test_patch_serializes_camel_case_without_gaps() {
    let patch = provided(json!({ "name": "n", "trackOptions": { "height": 2 } }));
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "name": "n", "trackOptions": { "height": 2 } }));
}

#[test]
fn test_typed_and_dynamic_merge_agree() {
    let defaults = serde_json::to_value(SliderOptions::defaults()).unwrap();
    let overrides = json!({ "name": "n", "trackOptions": { "color": "red" }, "thumbOptions": { "label": "l" } });

    let dynamic = optionize(&defaults, &overrides).unwrap();
    let typed = SliderOptions::optionize(&provided(overrides)).unwrap();

    assert_eq!(dynamic["trackOptions"], json!({ "height": 4, "color": "red" }));
    assert_eq!(dynamic["trackOptions"]["color"], typed.track_options.color.as_str());
    assert_eq!(dynamic["width"], typed.width);
}
