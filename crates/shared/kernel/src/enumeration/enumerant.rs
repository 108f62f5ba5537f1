use super::host::EnumerationType;
use super::registry::{Enumeration, RegistryInner};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, Weak};

/// One named singleton of a closed enumeration.
///
/// Handles are cheap to clone and compare by identity: two handles are equal only when
/// they refer to the same enumerant, whatever their payloads. Name and owner are fixed
/// when the registry creates the enumerant and never change afterwards.
pub struct Enumerant<T> {
    inner: Arc<EnumerantInner<T>>,
}

struct EnumerantInner<T> {
    name: String,
    host: EnumerationType,
    owner: Weak<RegistryInner<T>>,
    value: T,
}

impl<T> Enumerant<T> {
    pub(crate) fn new(
        name: String,
        host: EnumerationType,
        owner: Weak<RegistryInner<T>>,
        value: T,
    ) -> Self {
        Self { inner: Arc::new(EnumerantInner { name, host, owner, value }) }
    }

    /// The key this enumerant was declared under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The exact host type that declared this enumerant.
    #[must_use]
    pub fn host(&self) -> &EnumerationType {
        &self.inner.host
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.inner.value
    }

    /// The registry that declared this enumerant.
    ///
    /// Inherited enumerants keep reporting the registry of the ancestor that declared
    /// them. Returns `None` once every handle to that registry has been dropped.
    #[must_use]
    pub fn enumeration(&self) -> Option<Enumeration<T>> {
        self.inner.owner.upgrade().map(Enumeration::from_inner)
    }

    /// True if `enumeration` is the registry that declared this enumerant.
    #[must_use]
    pub fn is_declared_by(&self, enumeration: &Enumeration<T>) -> bool {
        enumeration.inner_ptr_eq(&self.inner.owner)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Enumerant<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> PartialEq for Enumerant<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Enumerant<T> {}

impl<T> Hash for Enumerant<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl<T> Deref for Enumerant<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Enumerant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumerant")
            .field("name", &self.name())
            .field("host", &self.host().name())
            .field("value", self.value())
            .finish()
    }
}

impl<T> fmt::Display for Enumerant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
