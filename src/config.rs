//! Engine configuration.
//!
//! [`VariationConfig`] holds the parameters a generational loop passes
//! into [`generate_offspring`](crate::generate_offspring).

use crate::error::SelectionResult;
use crate::selection::Selection;

/// Configuration for offspring generation.
///
/// Controls the parent-selection strategy and the depth limit applied to
/// freshly varied offspring.
///
/// # Defaults
///
/// ```
/// use treegp::{Selection, VariationConfig};
///
/// let config = VariationConfig::default();
/// assert_eq!(config.selection, Selection::Tournament { size: 3 });
/// assert_eq!(config.max_depth, 17);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use treegp::VariationConfig;
///
/// let config = VariationConfig::default()
///     .with_tournament_size(5)
///     .with_max_depth(12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariationConfig {
    /// Parent-selection strategy.
    pub selection: Selection,

    /// Maximum tree depth an offspring may have; deeper offspring are
    /// silently discarded after variation.
    ///
    /// The default of 17 is the conventional depth cap for tree-based
    /// genetic programming (Koza, 1992).
    pub max_depth: usize,
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            max_depth: 17,
        }
    }
}

impl VariationConfig {
    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Convenience builder for plain tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament { size })`.
    pub fn with_tournament_size(self, size: usize) -> Self {
        self.with_selection(Selection::Tournament { size })
    }

    /// Convenience builder for double tournament selection.
    pub fn with_double_tournament(
        self,
        fitness_pool: usize,
        size_pool: usize,
        competitors: usize,
        size_first: bool,
    ) -> Self {
        self.with_selection(Selection::DoubleTournament {
            fitness_pool,
            size_pool,
            competitors,
            size_first,
        })
    }

    /// Sets the offspring depth limit, clamped to at least 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Validates the configuration.
    ///
    /// The only rejectable state is a double tournament whose dominance
    /// constraint is violated; see
    /// [`Selection::validate`].
    pub fn validate(&self) -> SelectionResult<()> {
        self.selection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VariationConfig::default();
        assert_eq!(config.selection, Selection::Tournament { size: 3 });
        assert_eq!(config.max_depth, 17);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = VariationConfig::default()
            .with_double_tournament(6, 3, 4, true)
            .with_max_depth(9);

        assert_eq!(
            config.selection,
            Selection::DoubleTournament {
                fitness_pool: 6,
                size_pool: 3,
                competitors: 4,
                size_first: true,
            }
        );
        assert_eq!(config.max_depth, 9);
    }

    #[test]
    fn test_with_tournament_size() {
        let config = VariationConfig::default().with_tournament_size(5);
        assert_eq!(config.selection, Selection::Tournament { size: 5 });
    }

    #[test]
    fn test_max_depth_clamped() {
        let config = VariationConfig::default().with_max_depth(0);
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_validate_dominance_violation() {
        // size_first means the size pool dominates, so it must be the
        // larger of the two.
        let config = VariationConfig::default().with_double_tournament(6, 3, 4, false);
        assert!(config.validate().is_ok());

        let config = VariationConfig::default().with_double_tournament(6, 3, 4, true);
        assert!(config.validate().is_err());
    }
}
