//! Facade crate for the tessera utilities.
//! Re-exports the kernel modules and, behind the `logger` feature, the logging setup.
//! Keep this crate thin: it composes other crates and implements nothing itself.
//!
//! ## Usage
//! - Depend on `tessera` and `use tessera::prelude::*;`.
//! - Derive macros generate paths to `::tessera_kernel` by default; crates depending only
//!   on this facade pass `crate = tessera::kernel` (`#[merge(crate = ...)]`,
//!   `#[options_model(crate = ...)]`).

pub use tessera_kernel as kernel;
#[cfg(not(target_arch = "wasm32"))]
pub use tessera_kernel::config;
pub use tessera_kernel::{array, enumeration, merge, options, pool};
#[cfg(feature = "logger")]
pub use tessera_logger as logger;

pub mod prelude {
    pub use tessera_kernel::prelude::*;
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
