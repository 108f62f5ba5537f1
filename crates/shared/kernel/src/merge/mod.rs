//! Layered merging of option records.
//!
//! Two flavours share the same rules. [`merge`] and [`Merger`] work on untyped
//! `serde_json` documents, where keys ending in [`OPTIONS_SUFFIX`] are merged recursively.
//! The [`Merge`] trait (usually derived) does the same for typed records: fields ending in
//! `_options` recurse, `Option` fields only override when `Some`, everything else is
//! replaced by the later source.
//!
//! ```rust
//! use tessera_kernel::merge::{Merge, merge_all};
//!
//! #[derive(Clone, Default, Merge)]
//! struct ThumbPatch {
//!     size: Option<u32>,
//!     color: Option<String>,
//! }
//!
//! #[derive(Clone, Default, Merge)]
//! struct SliderPatch {
//!     width: Option<u32>,
//!     thumb_options: ThumbPatch,
//! }
//!
//! let mut resolved = SliderPatch { width: Some(100), thumb_options: ThumbPatch { size: Some(8), color: None } };
//! merge_all(&mut resolved, [&SliderPatch { width: None, thumb_options: ThumbPatch { size: None, color: Some("red".into()) } }]);
//!
//! assert_eq!(resolved.width, Some(100));
//! assert_eq!(resolved.thumb_options.size, Some(8));
//! assert_eq!(resolved.thumb_options.color.as_deref(), Some("red"));
//! ```

mod error;
mod value;

pub use error::{MergeError, MergeErrorExt};
pub use tessera_derive::Merge;
pub use value::{Merger, OPTIONS_SUFFIX, merge};

/// A record that can absorb a later source of the same shape.
pub trait Merge {
    /// Merges `source` into `self`; `source` wins wherever it provides a value.
    fn merge_from(&mut self, source: &Self);
}

/// `Some` merges into an existing value or takes its place; `None` is no override.
impl<T: Merge + Clone> Merge for Option<T> {
    fn merge_from(&mut self, source: &Self) {
        let Some(source) = source else {
            return;
        };
        match self {
            Some(target) => target.merge_from(source),
            None => *self = Some(source.clone()),
        }
    }
}

/// Merges every source into `target`, left to right.
pub fn merge_all<'a, T, I>(target: &mut T, sources: I)
where
    T: Merge + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for source in sources {
        target.merge_from(source);
    }
}
