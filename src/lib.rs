//! **tree_mazes** generates perfect mazes on rectangular grids with the binary tree algorithm,
//! reproducibly from a seed.
//!
//! ```
//! use tree_mazes::{config::MazeConfig, generators, analysis};
//!
//! let maze = generators::generate(&MazeConfig::default()).unwrap();
//! assert!(analysis::is_perfect_maze(&maze));
//! println!("{}", maze);
//! ```

pub mod analysis;
pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod links;
pub mod prng;
pub mod renderers;
pub mod units;
