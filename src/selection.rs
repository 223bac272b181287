//! Selection strategies for the variation engine.
//!
//! Selection determines which programs are chosen as parents for the
//! variation operators. The plain tournament applies pure fitness
//! pressure; the double tournament blends fitness pressure with
//! parsimony (program-size) pressure to counteract bloat.
//!
//! Every selector takes the population as a read-only slice **sorted
//! best-fitness-first** — callers sort once per generation. Selectors
//! never copy or mutate individuals; they return references into the
//! population.
//!
//! # References
//!
//! - Luke & Panait (2002), "Fighting Bloat with Nonparametric Parsimony
//!   Pressure"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{SelectionError, SelectionResult};
use crate::types::Program;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use treegp::Selection;
///
/// // Plain tournament with 3 competitors (moderate selection pressure)
/// let sel = Selection::Tournament { size: 3 };
///
/// // Fitness-dominant double tournament with parsimony pressure
/// let sel = Selection::DoubleTournament {
///     fitness_pool: 4,
///     size_pool: 2,
///     competitors: 3,
///     size_first: false,
/// };
/// assert!(sel.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `size` competitors at random with
    /// replacement, select the best.
    ///
    /// Higher `size` = stronger selection pressure.
    /// - 2: light pressure (good for diversity)
    /// - 3-5: moderate pressure (typical default)
    /// - above 5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(size) per selection
    Tournament {
        /// Number of competitors drawn per tournament.
        size: usize,
    },

    /// Two-stage double tournament combining fitness and program-size
    /// pressure, in a configurable dominance order.
    ///
    /// The dominant criterion runs a pool of ordinary tournaments over
    /// the full population; the secondary criterion then samples
    /// distinct survivors from that shortlist and keeps the best one by
    /// its own ranking. The dominant pool size must be at least the
    /// secondary draw count (see
    /// [`SelectionError::InvalidTournamentConfiguration`]).
    ///
    /// # Complexity
    /// O(n log n) per selection (size-ranked view of the population)
    DoubleTournament {
        /// Pool size of the fitness pass (`Sf`).
        fitness_pool: usize,
        /// Pool size of the size pass (`Sp`).
        size_pool: usize,
        /// Number of competitors drawn per inner tournament.
        competitors: usize,
        /// When `true`, size is the dominant criterion and fitness the
        /// secondary one; when `false`, the other way around.
        size_first: bool,
    },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament { size: 3 }
    }
}

impl Selection {
    /// Checks the double-tournament dominance constraint.
    ///
    /// Plain tournaments are always valid.
    pub fn validate(&self) -> SelectionResult<()> {
        match *self {
            Selection::Tournament { .. } => Ok(()),
            Selection::DoubleTournament {
                fitness_pool,
                size_pool,
                size_first,
                ..
            } => {
                let (dominant, secondary) = if size_first {
                    (size_pool, fitness_pool)
                } else {
                    (fitness_pool, size_pool)
                };
                if dominant < secondary {
                    Err(SelectionError::InvalidTournamentConfiguration {
                        dominant,
                        secondary,
                        size_first,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Selects one parent from the population.
    ///
    /// The population must be sorted best-fitness-first.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<'a, P: Program, R: Rng>(
        &self,
        rng: &mut R,
        population: &'a [P],
    ) -> SelectionResult<&'a P> {
        match *self {
            Selection::Tournament { size } => Ok(tournament(rng, population, size)),
            Selection::DoubleTournament {
                fitness_pool,
                size_pool,
                competitors,
                size_first,
            } => double_tournament(rng, population, fitness_pool, size_pool, competitors, size_first),
        }
    }
}

/// Tournament selection over a population sorted best-fitness-first.
///
/// Draws `k` indices uniformly at random **with replacement** and returns
/// the individual at the minimum drawn index, which is the best-ranked
/// competitor. With `k = 1` this degenerates to a uniform random pick.
/// `k` is normalized to at least 1.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<'a, P: Program, R: Rng>(rng: &mut R, population: &'a [P], k: usize) -> &'a P {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    &population[best_of_draws(rng, population.len(), k.max(1))]
}

/// Double tournament selection: fitness pressure and parsimony pressure
/// composed in a caller-chosen dominance order.
///
/// With `size_first == false`, fitness dominates: `fitness_pool`
/// ordinary tournaments of `competitors` each produce a shortlist, which
/// is ranked ascending by size; the size stage then draws `size_pool`
/// distinct shortlist entries without replacement and returns the
/// smallest-ranked survivor. With `size_first == true` the passes run in
/// the opposite order, with the shortlist ranked by fitness.
///
/// The dominant pool size must be at least the secondary draw count so
/// that the second stage can sample without replacement; violating this
/// fails with [`SelectionError::InvalidTournamentConfiguration`] before
/// any sampling occurs. Pool sizes and `competitors` are normalized to
/// at least 1.
///
/// The population must be sorted best-fitness-first; the size-ranked
/// view is built internally.
///
/// # Panics
/// Panics if `population` is empty.
pub fn double_tournament<'a, P: Program, R: Rng>(
    rng: &mut R,
    population: &'a [P],
    fitness_pool: usize,
    size_pool: usize,
    competitors: usize,
    size_first: bool,
) -> SelectionResult<&'a P> {
    let fitness_pool = fitness_pool.max(1);
    let size_pool = size_pool.max(1);
    let competitors = competitors.max(1);

    let (dominant, secondary) = if size_first {
        (size_pool, fitness_pool)
    } else {
        (fitness_pool, size_pool)
    };
    if dominant < secondary {
        return Err(SelectionError::InvalidTournamentConfiguration {
            dominant,
            secondary,
            size_first,
        });
    }

    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let direction = population[0].direction();

    if size_first {
        // Size pass over a size-ranked view of the population.
        let mut by_size: Vec<&P> = population.iter().collect();
        by_size.sort_by_key(|p| p.size());
        let mut shortlist: Vec<&P> = (0..size_pool)
            .map(|_| by_size[best_of_draws(rng, by_size.len(), competitors)])
            .collect();

        // Fitness pass over the fitness-ranked shortlist; equal-fitness
        // ties keep the smaller program first (stable sort layering).
        shortlist.sort_by_key(|p| p.size());
        shortlist.sort_by(|a, b| direction.sort_best_first(&a.fitness(), &b.fitness()));
        Ok(shortlist[min_distinct_draw(rng, shortlist.len(), fitness_pool)])
    } else {
        // Fitness pass: the population is already fitness-ranked.
        let mut shortlist: Vec<&P> = (0..fitness_pool)
            .map(|_| tournament(rng, population, competitors))
            .collect();

        // Size pass over the size-ranked shortlist; equal-size ties keep
        // the fitter program first.
        shortlist.sort_by(|a, b| direction.sort_best_first(&a.fitness(), &b.fitness()));
        shortlist.sort_by_key(|p| p.size());
        Ok(shortlist[min_distinct_draw(rng, shortlist.len(), size_pool)])
    }
}

/// Returns the first `n` individuals of a population sorted
/// best-fitness-first, as a subslice of the input (same objects, no
/// copies).
///
/// When `n` exceeds the population size the result is clamped to the
/// whole population.
pub fn elite<P: Program>(population: &[P], n: usize) -> &[P] {
    &population[..n.min(population.len())]
}

/// Minimum of `draws` indices drawn uniformly with replacement from
/// `[0, n)`.
fn best_of_draws<R: Rng>(rng: &mut R, n: usize, draws: usize) -> usize {
    let mut best = rng.random_range(0..n);
    for _ in 1..draws {
        best = best.min(rng.random_range(0..n));
    }
    best
}

/// Minimum of `draws` distinct indices sampled without replacement from
/// `[0, len)`. Callers guarantee `1 <= draws <= len`.
fn min_distinct_draw<R: Rng>(rng: &mut R, len: usize, draws: usize) -> usize {
    rand::seq::index::sample(rng, len, draws)
        .into_iter()
        .min()
        .expect("at least one distinct index is drawn")
}
