//! Resolving caller options against defaults.
//!
//! The layering is always the same: defaults first, caller-supplied options last, merged
//! with the rules of [`crate::merge`]. Typed models declare which fields are required and
//! what every optional field defaults to with `#[options_model]`:
//!
//! ```rust
//! use tessera_kernel::options::{OptionsModel, options_model};
//!
//! #[options_model]
//! #[derive(Debug)]
//! pub struct ThumbOptions {
//!     #[option(default = 8)]
//!     pub size: u32,
//!     pub color: String,
//! }
//!
//! #[options_model]
//! #[derive(Debug)]
//! pub struct SliderOptions {
//!     #[option(required)]
//!     pub label: String,
//!     pub thumb_options: ThumbOptions,
//! }
//!
//! let provided: SliderOptionsPatch = serde_json::from_value(serde_json::json!({
//!     "label": "Volume",
//!     "thumbOptions": { "color": "red" }
//! }))?;
//! let slider = SliderOptions::optionize(&provided)?;
//!
//! assert_eq!(slider.thumb_options.size, 8);
//! assert_eq!(slider.thumb_options.color, "red");
//! assert!(SliderOptions::optionize(&SliderOptionsPatch::default()).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::{OptionsError, OptionsErrorExt};
pub use tessera_derive::options_model;

use crate::merge::{Merge, MergeError, Merger};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A resolved options record with a partial companion (`Patch`) used for layering.
///
/// Implemented by `#[options_model]`; hand-written impls only need [`defaults`] and
/// [`from_patch`].
///
/// [`defaults`]: OptionsModel::defaults
/// [`from_patch`]: OptionsModel::from_patch
pub trait OptionsModel: Sized {
    type Patch: Merge + Clone + Default + Serialize + DeserializeOwned;

    /// Default layer: every optional field set, every required field left empty.
    fn defaults() -> Self::Patch;

    /// Resolves a fully layered patch.
    ///
    /// # Errors
    /// Returns [`OptionsError::MissingRequired`] for the first required field still unset.
    fn from_patch(patch: Self::Patch) -> Result<Self, OptionsError>;

    /// Merges `provided` over [`OptionsModel::defaults`].
    ///
    /// # Errors
    /// See [`OptionsModel::from_patch`].
    fn optionize(provided: &Self::Patch) -> Result<Self, OptionsError> {
        Self::optionize_with(&Self::defaults(), provided)
    }

    /// Merges `provided` over caller-chosen defaults.
    ///
    /// # Errors
    /// See [`OptionsModel::from_patch`].
    fn optionize_with(defaults: &Self::Patch, provided: &Self::Patch) -> Result<Self, OptionsError> {
        let mut patch = defaults.clone();
        patch.merge_from(provided);
        Self::from_patch(patch)
    }

    /// Merges an untyped options document over the serialized defaults, then resolves it.
    ///
    /// The layering follows [`crate::merge`]: `*Options` objects are merged key by key,
    /// `null` leaves the defaults in place.
    ///
    /// # Errors
    /// * [`OptionsError::Merge`] if `provided` cannot be merged over the defaults
    ///   (e.g. `trackOptions` is not an object).
    /// * [`OptionsError::Deserialize`] if the layered document does not match the patch shape.
    /// * Otherwise see [`OptionsModel::from_patch`].
    fn optionize_json(provided: &Value) -> Result<Self, OptionsError> {
        let defaults = serde_json::to_value(Self::defaults()).context("Writing default options")?;
        let layered = optionize(&defaults, provided).context("Layering provided options")?;
        let patch: Self::Patch = serde_json::from_value(layered).context("Reading provided options")?;
        Self::from_patch(patch)
    }
}

/// Clones `defaults` and merges `provided` over it.
///
/// # Errors
/// See [`crate::merge::Merger::merge`].
pub fn optionize(defaults: &Value, provided: &Value) -> Result<Value, MergeError> {
    optionize_layers(&[defaults, provided])
}

/// Clones the first layer and merges every following layer over it.
///
/// # Errors
/// Returns [`MergeError::NoSources`] unless at least two layers are given, otherwise see
/// [`crate::merge::Merger::merge`].
pub fn optionize_layers(layers: &[&Value]) -> Result<Value, MergeError> {
    optionize_layers_with(&Merger::new(), layers)
}

/// [`optionize_layers`] with a custom [`Merger`] (e.g. another reserved suffix).
///
/// # Errors
/// See [`optionize_layers`].
pub fn optionize_layers_with(merger: &Merger, layers: &[&Value]) -> Result<Value, MergeError> {
    let Some((defaults, overrides)) = layers.split_first() else {
        return Err(MergeError::NoSources { context: Some("No defaults layer".into()) });
    };
    let mut resolved = (*defaults).clone();
    merger.merge(&mut resolved, overrides)?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provided_options_win_over_defaults() {
        let defaults = json!({ "width": 100, "trackOptions": { "color": "gray", "height": 4 } });
        let provided = json!({ "width": 50, "trackOptions": { "color": "blue" } });

        let resolved = optionize(&defaults, &provided).unwrap();
        assert_eq!(resolved, json!({ "width": 50, "trackOptions": { "color": "blue", "height": 4 } }));
        assert_eq!(defaults["width"], 100);
    }

    #[test]
    fn layers_apply_in_order() {
        let resolved = optionize_layers(&[&json!({ "a": 1 }), &json!({ "a": 2, "b": 2 }), &json!({ "b": 3 })]).unwrap();
        assert_eq!(resolved, json!({ "a": 2, "b": 3 }));
    }

    #[test]
    fn custom_suffix_layers() {
        let merger = Merger::new().suffix("Config");
        let resolved = optionize_layers_with(
            &merger,
            &[&json!({ "dbConfig": { "host": "a" } }), &Value::Null, &json!({ "dbConfig": { "port": 1 } })],
        )
        .unwrap();
        assert_eq!(resolved, json!({ "dbConfig": { "host": "a", "port": 1 } }));
    }

    #[test]
    fn a_single_layer_is_not_enough() {
        assert!(matches!(optionize_layers(&[&json!({})]), Err(MergeError::NoSources { .. })));
        assert!(matches!(optionize_layers(&[]), Err(MergeError::NoSources { .. })));
    }
}
