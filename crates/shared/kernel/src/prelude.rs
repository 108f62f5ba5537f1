//! Commonly used kernel items.

pub use crate::enumeration::{Enumerant, Enumeration, EnumerationMap, EnumerationType};
pub use crate::merge::{Merge, Merger, merge};
pub use crate::options::{OptionsModel, optionize};
pub use crate::pool::Pool;
pub use tessera_derive::options_model;
