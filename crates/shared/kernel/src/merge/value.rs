use super::error::MergeError;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::trace;

/// Reserved key suffix marking a nested, recursively merged options object.
pub const OPTIONS_SUFFIX: &str = "Options";

/// Merges option documents into a target, recursing only into suffixed keys.
///
/// Every key whose name ends in the suffix (and is longer than it) is merged key by key
/// into the object already present in the target. Every other key replaces the target
/// value wholesale, whatever its shape. Absent keys never override.
///
/// All sources are validated against the target before anything is written, so a failed
/// merge leaves the target untouched.
#[derive(Debug, Clone)]
pub struct Merger {
    suffix: Cow<'static, str>,
}

impl Default for Merger {
    fn default() -> Self {
        Self { suffix: Cow::Borrowed(OPTIONS_SUFFIX) }
    }
}

impl Merger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the reserved suffix (case-sensitive). An empty suffix makes
    /// [`Merger::merge`] fail with [`MergeError::EmptySuffix`].
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn reserved_suffix(&self) -> &str {
        &self.suffix
    }

    /// True for `fooOptions`, false for `Options` and `foo`.
    #[must_use]
    pub fn is_nested_key(&self, key: &str) -> bool {
        key.len() > self.suffix.len() && key.ends_with(self.suffix.as_ref())
    }

    /// Merges `sources` left to right into `target` and returns it.
    ///
    /// `null` sources are skipped. Sources are only borrowed and never change.
    ///
    /// # Errors
    /// * [`MergeError::EmptySuffix`] if the reserved suffix is empty.
    /// * [`MergeError::NoSources`] if `sources` is empty.
    /// * [`MergeError::NullTarget`] if `target` is `null`.
    /// * [`MergeError::NotPlainObject`] if the target, a source, a nested suffixed source
    ///   value or the target value it merges into is neither an object nor `null`.
    pub fn merge<'t>(&self, target: &'t mut Value, sources: &[&Value]) -> Result<&'t mut Value, MergeError> {
        if self.suffix.is_empty() {
            return Err(MergeError::EmptySuffix { context: None });
        }
        if sources.is_empty() {
            return Err(MergeError::NoSources { context: None });
        }

        match &mut *target {
            Value::Object(map) => {
                let sources = sources
                    .iter()
                    .enumerate()
                    .filter_map(|(index, source)| match source {
                        Value::Null => None,
                        Value::Object(source) => Some(Ok((index, source))),
                        other => Some(Err(MergeError::not_plain(format!("sources[{index}]"), other))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                for (index, source) in &sources {
                    self.validate(Some(&*map), source, "target", &format!("sources[{index}]"))?;
                }
                for (index, source) in sources {
                    trace!(index, keys = source.len(), "Merging options source");
                    self.apply(map, source, 0);
                }
            },
            Value::Null => return Err(MergeError::NullTarget { context: None }),
            other => return Err(MergeError::not_plain("target", other)),
        }

        Ok(target)
    }

    fn validate(
        &self,
        target: Option<&Map<String, Value>>,
        source: &Map<String, Value>,
        target_path: &str,
        source_path: &str,
    ) -> Result<(), MergeError> {
        for (key, value) in source.iter().filter(|(key, _)| self.is_nested_key(key)) {
            let target_path = format!("{target_path}.{key}");
            let existing = match target.and_then(|target| target.get(key)) {
                None | Some(Value::Null) => None,
                Some(Value::Object(existing)) => Some(existing),
                Some(other) => return Err(MergeError::not_plain(target_path, other)),
            };

            let source_path = format!("{source_path}.{key}");
            match value {
                Value::Null => {},
                Value::Object(nested) => self.validate(existing, nested, &target_path, &source_path)?,
                other => return Err(MergeError::not_plain(source_path, other)),
            }
        }
        Ok(())
    }

    fn apply(&self, target: &mut Map<String, Value>, source: &Map<String, Value>, depth: usize) {
        for (key, value) in source {
            if !self.is_nested_key(key) {
                target.insert(key.clone(), value.clone());
                continue;
            }

            let slot = target.entry(key.clone()).or_insert_with(|| Value::Object(Map::new()));
            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            if let (Value::Object(nested_target), Value::Object(nested_source)) = (slot, value) {
                trace!(key = %key, depth = depth + 1, "Merging nested options");
                self.apply(nested_target, nested_source, depth + 1);
            }
        }
    }
}

/// Merges `sources` into `target` with the default [`OPTIONS_SUFFIX`].
///
/// # Errors
/// See [`Merger::merge`].
pub fn merge<'t>(target: &'t mut Value, sources: &[&Value]) -> Result<&'t mut Value, MergeError> {
    Merger::new().merge(target, sources)
}
