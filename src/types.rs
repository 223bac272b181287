//! Core trait definitions for the variation engine.
//!
//! The two central traits — [`ProgramTree`] and [`Program`] — define the
//! contract between the generic selection/variation engine and a concrete
//! genetic-programming representation. The engine never builds or
//! interprets trees itself; it manipulates them only through these
//! capabilities.

use rand::Rng;

/// Whether lower or higher fitness values are considered better.
///
/// Populations handed to the selectors are sorted best-first by the
/// caller; the engine only needs the direction when it re-sorts a
/// tournament shortlist by fitness internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessDirection {
    /// Lower fitness values are better.
    Minimize,
    /// Higher fitness values are better.
    Maximize,
}

impl FitnessDirection {
    /// Orders two fitness values so that the better one sorts first.
    ///
    /// Incomparable values (e.g. NaN) compare as equal.
    pub fn sort_best_first<F: PartialOrd>(self, a: &F, b: &F) -> std::cmp::Ordering {
        let ord = a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal);
        match self {
            FitnessDirection::Minimize => ord,
            FitnessDirection::Maximize => ord.reverse(),
        }
    }
}

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness for the
    /// given direction.
    ///
    /// Used for fresh offspring, whose fitness an external evaluator has
    /// not assigned yet.
    fn worst(direction: FitnessDirection) -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst(direction: FitnessDirection) -> Self {
        match direction {
            FitnessDirection::Minimize => f64::INFINITY,
            FitnessDirection::Maximize => f64::NEG_INFINITY,
        }
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst(direction: FitnessDirection) -> Self {
        match direction {
            FitnessDirection::Minimize => f32::INFINITY,
            FitnessDirection::Maximize => f32::NEG_INFINITY,
        }
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Child-index path from a tree root down to one of its nodes.
///
/// An empty path addresses the root itself. Paths are only meaningful for
/// the tree that produced them.
pub type NodePath = Vec<usize>;

/// Structural capabilities the engine requires from a program tree.
///
/// Implementors own the node representation entirely; the engine
/// addresses nodes by [`NodePath`] and edits trees only through
/// `subtree`/`replace_subtree`. All randomness comes from the caller's
/// `Rng`.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// enum Expr {
///     Leaf(f64),
///     Op(Opcode, Vec<Expr>),
/// }
///
/// impl ProgramTree for Expr {
///     type Primitives = OpTable;
///     // ...
/// }
/// ```
pub trait ProgramTree: Clone {
    /// The operator and terminal sets trees are grown from.
    ///
    /// Opaque to the engine; it is threaded from a parent individual into
    /// [`grow`](ProgramTree::grow) unchanged.
    type Primitives;

    /// Grows a fresh random tree of at most `max_depth` levels from the
    /// given primitive sets.
    fn grow<R: Rng>(rng: &mut R, primitives: &Self::Primitives, max_depth: usize) -> Self;

    /// Selects a node uniformly at random among all nodes of this tree.
    fn random_node<R: Rng>(&self, rng: &mut R) -> NodePath;

    /// Returns a copy of the subtree rooted at `at`, or `None` if the
    /// path does not address a node of this tree.
    fn subtree(&self, at: &[usize]) -> Option<Self>;

    /// Replaces the subtree rooted at `at`. Returns `false` (leaving the
    /// tree unchanged) if the path does not address a node of this tree.
    fn replace_subtree(&mut self, at: &[usize], subtree: Self) -> bool;

    /// Structural depth of this tree (a single node has depth 1).
    fn depth(&self) -> usize;

    /// Number of nodes in this tree.
    fn size(&self) -> usize;

    /// Exchanges the subtree at `at` in `self` with the subtree at
    /// `other_at` in `other`.
    ///
    /// Returns `false` and leaves both trees unchanged if either path is
    /// invalid.
    fn swap_subtrees(&mut self, at: &[usize], other: &mut Self, other_at: &[usize]) -> bool {
        match (self.subtree(at), other.subtree(other_at)) {
            (Some(own), Some(theirs)) => {
                self.replace_subtree(at, theirs) && other.replace_subtree(other_at, own)
            }
            _ => false,
        }
    }
}

/// A candidate program in the population.
///
/// Wraps a [`ProgramTree`] together with its fitness and the
/// configuration it was built with (primitive sets, depth bound, fitness
/// direction). Selectors read programs; only the variation operators
/// create new ones, always by editing a *copy* of a parent's tree —
/// a program handed to the engine is never mutated in place.
pub trait Program: Clone {
    /// The tree representation.
    type Tree: ProgramTree;

    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// The program tree.
    fn tree(&self) -> &Self::Tree;

    /// Current fitness, assigned by an external evaluator.
    ///
    /// Fresh offspring carry [`Fitness::worst`] until evaluated. The
    /// engine only reads fitness of already-evaluated individuals.
    fn fitness(&self) -> Self::Fitness;

    /// Node count of the program tree.
    fn size(&self) -> usize;

    /// Structural depth of the program tree.
    fn depth(&self) -> usize;

    /// The primitive sets this program was built from.
    fn primitives(&self) -> &<Self::Tree as ProgramTree>::Primitives;

    /// Depth bound used when growing new subtrees for this lineage.
    fn max_depth(&self) -> usize;

    /// The fitness-direction policy this program was configured with.
    fn direction(&self) -> FitnessDirection;

    /// Constructs an offspring adopting `tree`, inheriting this program's
    /// configuration (primitives, depth bound, model identity, fitness
    /// direction) with fitness unset.
    fn spawn(&self, tree: Self::Tree) -> Self;
}
