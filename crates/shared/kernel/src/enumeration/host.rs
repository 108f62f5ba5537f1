use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Descriptor of a type hosting enumerants, together with its ancestor chain.
///
/// A host type plays the role of a class in a class hierarchy: subtypes are created with
/// [`EnumerationType::derive`] and may augment the enumeration of an ancestor. Identity is
/// reference identity; two descriptors with the same name are still different types.
///
/// A host starts unsealed and is sealed exactly once, when the registry for it is built.
#[derive(Clone)]
pub struct EnumerationType {
    inner: Arc<TypeInner>,
}

struct TypeInner {
    name: Cow<'static, str>,
    parent: Option<EnumerationType>,
    sealed: AtomicBool,
}

impl EnumerationType {
    /// Creates a type without ancestors.
    #[must_use]
    pub fn root(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_parent(name.into(), None)
    }

    /// Creates a subtype of `parent`.
    #[must_use]
    pub fn derive(parent: &Self, name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_parent(name.into(), Some(parent.clone()))
    }

    fn with_parent(name: Cow<'static, str>, parent: Option<Self>) -> Self {
        Self { inner: Arc::new(TypeInner { name, parent, sealed: AtomicBool::new(false) }) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.inner.parent.as_ref()
    }

    /// Walks the chain from this type up to the root.
    pub fn lineage(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |ty| ty.parent())
    }

    /// The chain from the root down to (and including) this type.
    #[must_use]
    pub fn ancestors(&self) -> Vec<Self> {
        let mut chain: Vec<Self> = self.lineage().cloned().collect();
        chain.reverse();
        chain
    }

    /// Number of ancestors above this type.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.lineage().count() - 1
    }

    /// True if `ancestor` is a strict ancestor of this type.
    #[must_use]
    pub fn extends(&self, ancestor: &Self) -> bool {
        self.lineage().skip(1).any(|ty| ty == ancestor)
    }

    /// True if this type is `other` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        other.lineage().any(|ty| ty == self)
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.inner.sealed.load(Ordering::Acquire)
    }

    /// Moves the type to the sealed state. Returns `false` if it was already sealed.
    pub(crate) fn seal(&self) -> bool {
        self.inner.sealed.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for EnumerationType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for EnumerationType {}

impl fmt::Debug for EnumerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumerationType")
            .field("name", &self.name())
            .field("parent", &self.parent().map(Self::name))
            .field("sealed", &self.is_sealed())
            .finish()
    }
}

impl fmt::Display for EnumerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
