//! Variation operators and offspring dispatch.
//!
//! Subtree crossover and subtree mutation produce new programs by
//! structurally editing *copies* of the selected parents' trees; the
//! parents themselves are never touched. [`generate_offspring`] is the
//! per-call entry point a generational loop drives: select parents, flip
//! an unbiased coin between the two operators, and depth-filter the
//! result.
//!
//! Offspring leave this module with fitness unset — an external
//! evaluator must assign it before they take part in further selection.

use crate::config::VariationConfig;
use crate::error::SelectionResult;
use crate::types::{Program, ProgramTree};
use rand::Rng;

/// Subtree crossover: picks one uniform-random node in a copy of each
/// parent's tree, exchanges the two subtrees, and spawns one offspring
/// per parent from its own post-swap copy.
///
/// Each offspring inherits the configuration (primitive sets, depth
/// bound, fitness direction) of its respective parent. The two parents
/// may be the same individual; the offspring are still independent
/// copies.
pub fn subtree_crossover<P: Program, R: Rng>(rng: &mut R, first: &P, second: &P) -> (P, P) {
    let mut tree1 = first.tree().clone();
    let mut tree2 = second.tree().clone();

    let at1 = tree1.random_node(rng);
    let at2 = tree2.random_node(rng);
    let swapped = tree1.swap_subtrees(&at1, &mut tree2, &at2);
    debug_assert!(swapped, "random_node must address a node of its own tree");

    (first.spawn(tree1), second.spawn(tree2))
}

/// Subtree mutation: picks one uniform-random node in a copy of the
/// parent's tree and replaces it with a freshly grown random subtree,
/// bounded by the parent's configured depth limit and built from the
/// parent's primitive sets.
pub fn subtree_mutation<P: Program, R: Rng>(rng: &mut R, parent: &P) -> P {
    let mut tree = parent.tree().clone();

    let at = tree.random_node(rng);
    let graft = <P::Tree>::grow(rng, parent.primitives(), parent.max_depth());
    let replaced = tree.replace_subtree(&at, graft);
    debug_assert!(replaced, "random_node must address a node of its own tree");

    parent.spawn(tree)
}

/// Generates 0, 1, or 2 offspring from a population sorted
/// best-fitness-first.
///
/// Flips an unbiased coin between crossover (two parents, two offspring)
/// and mutation (one parent, one offspring); each parent comes from an
/// independent run of the configured selector. Offspring deeper than
/// `config.max_depth` are discarded afterwards, so the result may be
/// empty — that is an expected outcome, not an error, and the caller
/// re-invokes as needed.
///
/// Fails before any sampling if the selection configuration violates the
/// double-tournament dominance constraint.
///
/// # Panics
/// Panics if `population` is empty.
pub fn generate_offspring<P: Program, R: Rng>(
    rng: &mut R,
    population: &[P],
    config: &VariationConfig,
) -> SelectionResult<Vec<P>> {
    config.selection.validate()?;

    let offspring = if rng.random_bool(0.5) {
        let first = config.selection.select(rng, population)?;
        let second = config.selection.select(rng, population)?;
        let (a, b) = subtree_crossover(rng, first, second);
        vec![a, b]
    } else {
        let parent = config.selection.select(rng, population)?;
        vec![subtree_mutation(rng, parent)]
    };

    Ok(filter_by_max_depth(offspring, config.max_depth))
}

/// Discards every program whose tree is deeper than `limit`, preserving
/// the relative order of the survivors. Applying the filter twice is a
/// no-op.
pub fn filter_by_max_depth<P: Program>(offspring: Vec<P>, limit: usize) -> Vec<P> {
    offspring.into_iter().filter(|p| p.depth() <= limit).collect()
}
