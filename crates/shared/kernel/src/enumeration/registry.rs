use super::enumerant::Enumerant;
use super::error::EnumerationError;
use super::host::EnumerationType;
use fxhash::FxHashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

/// A closed, ordered set of enumerants with name ↔ value lookup.
///
/// Built once per host type through [`EnumerationBuilder`]; immutable afterwards.
/// Keys and values are parallel lists in declaration order, inherited enumerants first.
pub struct Enumeration<T> {
    inner: Arc<RegistryInner<T>>,
}

pub(crate) struct RegistryInner<T> {
    host: EnumerationType,
    keys: Vec<String>,
    values: Vec<Enumerant<T>>,
    index: FxHashMap<String, usize>,
    documentation: Option<String>,
    parent: Option<Enumeration<T>>,
}

impl<T> Enumeration<T> {
    /// Starts declaring the enumerants of `host`.
    ///
    /// # Errors
    /// Returns [`EnumerationError::Sealed`] if `host` already owns a registry.
    pub fn builder(host: &EnumerationType) -> Result<EnumerationBuilder<T>, EnumerationError> {
        EnumerationBuilder::new(host)
    }

    pub(crate) const fn from_inner(inner: Arc<RegistryInner<T>>) -> Self {
        Self { inner }
    }

    pub(crate) fn inner_ptr_eq(&self, other: &Weak<RegistryInner<T>>) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.inner), other.as_ptr())
    }

    #[must_use]
    pub fn host(&self) -> &EnumerationType {
        &self.inner.host
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.inner.keys
    }

    #[must_use]
    pub fn values(&self) -> &[Enumerant<T>] {
        &self.inner.values
    }

    #[must_use]
    pub fn documentation(&self) -> Option<&str> {
        self.inner.documentation.as_deref()
    }

    /// The ancestor registry whose enumerants this one inherited.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.inner.parent.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.values.len()
    }

    /// Keys and values in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Enumerant<T>)> {
        self.inner.keys.iter().map(String::as_str).zip(self.inner.values.iter())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Enumerant<T>> {
        self.inner.index.get(key).map(|&position| &self.inner.values[position])
    }

    /// Looks up the enumerant declared under `key`.
    ///
    /// # Errors
    /// Returns [`EnumerationError::UnknownKey`] if no enumerant has that key.
    pub fn value_of(&self, key: &str) -> Result<&Enumerant<T>, EnumerationError> {
        self.get(key).ok_or_else(|| EnumerationError::UnknownKey {
            key: key.to_owned().into(),
            context: Some(format!("Looking up {}", self.host()).into()),
        })
    }

    /// Returns the key of a member enumerant.
    ///
    /// # Errors
    /// Returns [`EnumerationError::UnknownValue`] if `value` is not a member.
    pub fn key_of<'v>(&self, value: &'v Enumerant<T>) -> Result<&'v str, EnumerationError> {
        if self.includes(value) {
            return Ok(value.name());
        }
        Err(EnumerationError::UnknownValue {
            message: format!("{}.{} is not a member of {}", value.host(), value, self.host()).into(),
            context: None,
        })
    }

    /// True iff `value` is one of this registry's enumerants (identity, not name).
    #[must_use]
    pub fn includes(&self, value: &Enumerant<T>) -> bool {
        self.position(value).is_some()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.index.contains_key(key)
    }

    pub(crate) fn position(&self, value: &Enumerant<T>) -> Option<usize> {
        self.inner.values.iter().position(|candidate| candidate == value)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Enumeration<()> {
    /// Builds a payload-free enumeration from its keys.
    ///
    /// # Errors
    /// Same as [`EnumerationBuilder::build`].
    pub fn of<I>(host: &EnumerationType, keys: I) -> Result<Self, EnumerationError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        keys.into_iter().fold(Self::builder(host)?, |builder, key| builder.value(key, ())).build()
    }
}

impl<T> Clone for Enumeration<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> PartialEq for Enumeration<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Enumeration<T> {}

impl<'a, T> IntoIterator for &'a Enumeration<T> {
    type Item = &'a Enumerant<T>;
    type IntoIter = std::slice::Iter<'a, Enumerant<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.values.iter()
    }
}

impl<T> fmt::Debug for Enumeration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumeration")
            .field("host", &self.host().name())
            .field("keys", &self.keys())
            .field("documentation", &self.documentation())
            .finish_non_exhaustive()
    }
}

/// Declares the enumerants of one host type.
///
/// Creating the builder is the construction guard of the host: it fails once the host
/// is sealed. [`EnumerationBuilder::build`] seals it.
pub struct EnumerationBuilder<T> {
    host: EnumerationType,
    inherited: Option<Enumeration<T>>,
    declared: Vec<(String, T)>,
    documentation: Option<String>,
}

impl<T> EnumerationBuilder<T> {
    /// # Errors
    /// Returns [`EnumerationError::Sealed`] if `host` already owns a registry.
    pub fn new(host: &EnumerationType) -> Result<Self, EnumerationError> {
        if host.is_sealed() {
            return Err(sealed(host));
        }
        Ok(Self { host: host.clone(), inherited: None, declared: Vec::new(), documentation: None })
    }

    /// Declares the next enumerant.
    #[must_use = "The builder must be built to create the enumeration."]
    pub fn value(mut self, key: impl Into<String>, value: T) -> Self {
        self.declared.push((key.into(), value));
        self
    }

    #[must_use = "The builder must be built to create the enumeration."]
    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Lists the enumerants of an ancestor's registry before the ones declared here.
    ///
    /// Inherited enumerants keep their key and owner. Replaces any registry inherited
    /// earlier.
    ///
    /// The registry must belong to the nearest ancestor that owns one, so the enumerants
    /// of every registered type along the chain are inherited.
    ///
    /// # Errors
    /// * [`EnumerationError::NotAnAncestor`] unless the registry's host is a strict
    ///   ancestor of this builder's host.
    /// * [`EnumerationError::SkippedAncestor`] if a type between the two owns a registry.
    pub fn inherit(mut self, ancestor: &Enumeration<T>) -> Result<Self, EnumerationError> {
        if !self.host.extends(ancestor.host()) {
            return Err(EnumerationError::NotAnAncestor {
                message: format!("{} does not extend {}", self.host, ancestor.host()).into(),
                context: None,
            });
        }
        check_nearest(&self.host, ancestor.host())?;
        self.inherited = Some(ancestor.clone());
        Ok(self)
    }

    /// Validates the declarations, creates the enumerants and seals the host.
    ///
    /// # Errors
    /// * [`EnumerationError::Empty`] if neither inherited nor declared enumerants exist.
    /// * [`EnumerationError::InvalidKey`] for an empty key.
    /// * [`EnumerationError::DuplicateKey`] if a key repeats (inherited keys included).
    /// * [`EnumerationError::SkippedAncestor`] if an intermediate type was sealed after
    ///   [`EnumerationBuilder::inherit`].
    /// * [`EnumerationError::Sealed`] if another registry sealed the host first.
    pub fn build(self) -> Result<Enumeration<T>, EnumerationError> {
        let Self { host, inherited, declared, documentation } = self;
        if let Some(parent) = &inherited {
            check_nearest(&host, parent.host())?;
        }

        let inherited_values = inherited.as_ref().map(|parent| parent.values().to_vec()).unwrap_or_default();
        if inherited_values.is_empty() && declared.is_empty() {
            return Err(EnumerationError::Empty { host: host.name().to_owned().into(), context: None });
        }

        let declared_keys = declared.iter().map(|(key, _)| key.as_str());
        let mut keys = Vec::with_capacity(inherited_values.len() + declared.len());
        let mut index = FxHashMap::default();
        for key in inherited_values.iter().map(Enumerant::name).chain(declared_keys) {
            validate_key(&host, key)?;
            if index.insert(key.to_owned(), keys.len()).is_some() {
                return Err(EnumerationError::DuplicateKey {
                    key: key.to_owned().into(),
                    context: Some(format!("Declaring {host}").into()),
                });
            }
            keys.push(key.to_owned());
        }

        let inherited_count = inherited_values.len();
        let inner = Arc::new_cyclic(|owner: &Weak<RegistryInner<T>>| {
            let mut values = inherited_values;
            values.extend(
                declared
                    .into_iter()
                    .map(|(name, value)| Enumerant::new(name, host.clone(), owner.clone(), value)),
            );
            RegistryInner { host: host.clone(), keys, values, index, documentation, parent: inherited }
        });

        if !host.seal() {
            return Err(sealed(&host));
        }

        debug!(
            host = %host,
            keys = inner.keys.len(),
            inherited = inherited_count,
            "Sealed enumeration type"
        );

        Ok(Enumeration { inner })
    }
}

impl<T> fmt::Debug for EnumerationBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let declared: Vec<&str> = self.declared.iter().map(|(key, _)| key.as_str()).collect();
        f.debug_struct("EnumerationBuilder")
            .field("host", &self.host.name())
            .field("inherited", &self.inherited.as_ref().map(|parent| parent.host().name()))
            .field("declared", &declared)
            .finish_non_exhaustive()
    }
}

fn check_nearest(host: &EnumerationType, ancestor: &EnumerationType) -> Result<(), EnumerationError> {
    let skipped = host.lineage().skip(1).take_while(|ty| *ty != ancestor).find(|ty| ty.is_sealed());
    match skipped {
        Some(intermediate) => Err(EnumerationError::SkippedAncestor {
            message: format!("{host} inherits {ancestor} but {intermediate} owns a registry").into(),
            context: None,
        }),
        None => Ok(()),
    }
}

fn validate_key(host: &EnumerationType, key: &str) -> Result<(), EnumerationError> {
    if key.is_empty() {
        return Err(EnumerationError::InvalidKey {
            message: "keys must not be empty".into(),
            context: Some(format!("Declaring {host}").into()),
        });
    }
    if !is_conventional_key(key) {
        debug!(host = %host, key, "Enumeration key is not UPPER_SNAKE_CASE");
    }
    Ok(())
}

fn is_conventional_key(key: &str) -> bool {
    key.starts_with(|c: char| c.is_ascii_uppercase())
        && key.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn sealed(host: &EnumerationType) -> EnumerationError {
    EnumerationError::Sealed {
        host: host.name().to_owned().into(),
        context: Some("Enumerants are declared once, before the registry is built".into()),
    }
}
