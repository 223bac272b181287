//! Selection and variation engine for tree-based genetic programming.
//!
//! Decides, generation after generation, which candidate programs
//! survive, reproduce, and mutate:
//!
//! - **Tournament selection**: best of `k` uniform draws over a
//!   fitness-ranked population.
//! - **Double tournament**: two-stage selection blending fitness
//!   pressure with parsimony (program-size) pressure in a configurable
//!   dominance order, to fight bloat.
//! - **Elitism**: top-`n` extraction from a pre-sorted population.
//! - **Subtree crossover / subtree mutation**: structural variation on
//!   copies of the selected parents' trees.
//! - **Depth filtering**: post-variation removal of offspring exceeding
//!   a depth limit.
//!
//! # Architecture
//!
//! The engine is a pure library surface: it owns no randomness (every
//! operator takes the caller's [`rand::Rng`]), no population state, and
//! no tree representation. Concrete programs plug in through the
//! [`ProgramTree`] and [`Program`] capability traits; fitness
//! evaluation, population bootstrapping, and the generational loop are
//! external collaborators. All operations are synchronous and
//! single-threaded — callers wanting parallelism run independent engine
//! calls with independent RNGs.
//!
//! # Core Traits
//!
//! - [`ProgramTree`]: structural tree capabilities (grow, random node,
//!   subtree swap, depth)
//! - [`Program`]: a candidate program — tree plus fitness, size, and the
//!   configuration it was built with
//!
//! # Key Types
//!
//! - [`Selection`]: parent-selection strategy (plain or double
//!   tournament)
//! - [`VariationConfig`]: parameters for [`generate_offspring`]
//! - [`SelectionError`]: configuration-contract violations

mod config;
mod error;
mod operators;
mod selection;
mod types;

pub use config::VariationConfig;
pub use error::{SelectionError, SelectionResult};
pub use operators::{filter_by_max_depth, generate_offspring, subtree_crossover, subtree_mutation};
pub use selection::{double_tournament, elite, tournament, Selection};
pub use types::{Fitness, FitnessDirection, NodePath, Program, ProgramTree};
