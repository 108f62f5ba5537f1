//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight: every module is a self-contained leaf utility.
//!
//! ## Enumerations
//! Closed sets of named singletons with stable identity, built explicitly and sealed:
//! ```rust
//! # use tessera_kernel::enumeration::{Enumeration, EnumerationType};
//! let color = EnumerationType::root("Color");
//! let colors = Enumeration::of(&color, ["RED", "GREEN", "BLUE"]).unwrap();
//!
//! let red = colors.value_of("RED").unwrap();
//! assert_eq!(colors.key_of(red).unwrap(), "RED");
//! assert!(Enumeration::<()>::builder(&color).is_err());
//! ```
//!
//! ## Options merging
//! Keys ending in `Options` are merged recursively, every other key is replaced:
//! ```rust
//! # use serde_json::json;
//! # use tessera_kernel::merge::merge;
//! let mut target = json!({ "a": 1, "fooOptions": { "x": 1 } });
//! merge(&mut target, &[&json!({ "fooOptions": { "y": 2 } })]).unwrap();
//! assert_eq!(target, json!({ "a": 1, "fooOptions": { "x": 1, "y": 2 } }));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use tessera_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config(Some("tessera.toml")).unwrap();
//! ```

extern crate self as tessera_kernel;

pub mod array;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod enumeration;
pub mod merge;
pub mod options;
pub mod pool;
pub mod prelude;

pub use tessera_derive::{Merge, options_model, tessera_error};
