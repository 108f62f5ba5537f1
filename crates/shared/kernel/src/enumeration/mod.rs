//! Closed enumerations of named singletons.
//!
//! An [`EnumerationType`] describes the host type, an [`Enumeration`] is the sealed registry
//! built for it and every [`Enumerant`] is a unique handle owned by one registry.
//! Subtypes created with [`EnumerationType::derive`] may augment an ancestor's registry:
//! the subtype registry lists the inherited enumerants first, and those keep reporting
//! the ancestor registry as their owner.
//!
//! ```rust
//! use tessera_kernel::enumeration::{Enumeration, EnumerationType};
//!
//! let shape = EnumerationType::root("Shape");
//! let shapes = Enumeration::builder(&shape)?
//!     .value("CIRCLE", 0_u8)
//!     .value("SQUARE", 4)
//!     .documentation("Basic shapes")
//!     .build()?;
//!
//! let fancy = EnumerationType::derive(&shape, "FancyShape");
//! let fancy_shapes = Enumeration::builder(&fancy)?.inherit(&shapes)?.value("STAR", 10).build()?;
//!
//! assert_eq!(fancy_shapes.keys(), ["CIRCLE", "SQUARE", "STAR"]);
//! assert!(fancy_shapes.value_of("CIRCLE")?.is_declared_by(&shapes));
//! # Ok::<(), tessera_kernel::enumeration::EnumerationError>(())
//! ```

mod enumerant;
mod error;
mod host;
mod map;
mod registry;

pub use enumerant::Enumerant;
pub use error::{EnumerationError, EnumerationErrorExt};
pub use host::EnumerationType;
pub use map::EnumerationMap;
pub use registry::{Enumeration, EnumerationBuilder};
