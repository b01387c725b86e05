//! # plugin-commands
//!
//! Plugin command discovery for CLI tools.
//!
//! A host CLI declares its plugins as ordinary package dependencies named by
//! convention (`<tool>-plugin-*`). This crate finds those packages, loads the
//! command descriptors they export, and returns one deduplicated command list
//! for the host to dispatch against.
//!
//! Two installation shapes are handled: a tool installed inside the
//! application's own dependency tree scans the application manifest; a
//! globally-installed tool additionally scans its own manifest, with the
//! application's commands taking precedence on name collisions.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plugin_commands::{DiscoveryConfig, discover_commands};
//!
//! fn main() -> Result<(), plugin_commands::DiscoveryError> {
//!     let config = DiscoveryConfig::for_tool(
//!         "rnpm",
//!         std::env::current_dir()?,
//!         env!("CARGO_MANIFEST_DIR"),
//!     );
//!     for command in discover_commands(config)? {
//!         println!("{}", command.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Expected Layout
//!
//! ```text
//! app/
//! ├── package.json            dependencies: { "rnpm-plugin-link": "*" }
//! └── node_modules/
//!     └── rnpm-plugin-link/
//!         ├── package.json    main: "index.json" (default)
//!         └── index.json      {"name": "link", ...} or [{...}, {...}]
//! ```

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod loader;
pub mod locate;
pub mod manifest;
pub mod sources;

// Re-exports for convenience
pub use config::{DEFAULT_MANIFEST_FILE, DEFAULT_MODULES_DIR, DiscoveryConfig};
pub use discovery::{CommandDiscovery, discover_commands};
pub use error::DiscoveryError;
pub use loader::{CommandDescriptor, FsModuleLoader, ModuleLoader};
pub use manifest::PackageManifest;
pub use sources::{SearchContext, resolve_contexts};

pub type Result<T> = std::result::Result<T, DiscoveryError>;
