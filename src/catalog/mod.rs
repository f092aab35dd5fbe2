//! Language catalog: display names and scripts for classifier codes.
//!
//! # Architecture
//!
//! - `table`: the fixed code → (display name, script) rows
//! - `registry`: `LanguageCatalog`, an immutable index over the table
//!
//! # Example
//!
//! ```rust
//! use langchart::catalog::LanguageCatalog;
//!
//! let catalog = LanguageCatalog::global();
//! let entry = catalog.resolve("en").unwrap();
//! assert_eq!(entry.display_name, "English");
//! assert!(catalog.resolve("xx-Unknown").is_err());
//! ```

mod registry;
mod table;

pub use registry::{LanguageCatalog, LanguageEntry};
