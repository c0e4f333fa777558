//! Pascal Lattice
//!
//! Builds a triangular DAG (every interior node has two parents) from a flat
//! sequence of values and finds the best root-to-leaf path sum, with or
//! without memoization.
//!
//! # Example
//!
//! ```
//! use pascal_lattice::{generate_with_values, GenerateConfig, Mode};
//!
//! let config = GenerateConfig {
//!     mode: Mode::Minimize,
//!     ..GenerateConfig::default()
//! };
//! let view = generate_with_values(&config, &[1, 2, 3, 4, 5, 6]).unwrap();
//! assert_eq!(view.root_optimal_sum, 7);
//! assert_eq!(view.layout.edges.len(), 6);
//! ```

#![doc(html_root_url = "https://docs.rs/pascal-lattice")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod lattice;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use lattice::{
    generate, generate_with_values, Lattice, LatticeError, LatticeView, MemoTable, Mode,
};
pub use util::config::GenerateConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "pascal-lattice";
