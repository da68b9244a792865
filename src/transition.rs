//! Differences between two layouts and the animation that moves between them.

use core::fmt;

use num_traits::Float;

use crate::grid::GridLayout;

/// Card dimension changes at or below this many pixels are ignored.
pub const DIMENSION_EPSILON: f64 = 1.0;
/// Duration for a resize that keeps the grid shape.
const RESIZE_DURATION_MS: u32 = 250;
/// Duration when the grid shape or orientation changes.
const RESTRUCTURE_DURATION_MS: u32 = 450;
/// Total stagger spread across all cells of the next grid.
const STAGGER_BUDGET_MS: u32 = 400;
/// Upper bound for the per-card stagger.
const MAX_STAGGER_MS: u32 = 50;

/// What changed between two layouts.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutComparison {
    /// Card width or height moved by more than [`DIMENSION_EPSILON`].
    pub dimensions_changed: bool,
    /// Column or row count differs.
    pub grid_changed: bool,
    /// Screen orientation classification differs.
    pub orientation_changed: bool,
    /// `next.efficiency - previous.efficiency`.
    pub efficiency_delta: f64,
}

impl LayoutComparison {
    /// Whether cards move to different cells (not merely resize).
    pub fn is_restructure(&self) -> bool {
        self.grid_changed || self.orientation_changed
    }

    /// Nothing visible changed.
    pub fn is_unchanged(&self) -> bool {
        !self.dimensions_changed && !self.grid_changed && !self.orientation_changed
    }
}

/// Compare two layouts.
///
/// Orientation is re-classified from each layout's container aspect ratio
/// and recorded device orientation.
pub fn compare(previous: &GridLayout, next: &GridLayout) -> LayoutComparison {
    let dimensions_changed = Float::abs(next.card.width - previous.card.width) > DIMENSION_EPSILON
        || Float::abs(next.card.height - previous.card.height) > DIMENSION_EPSILON;
    LayoutComparison {
        dimensions_changed,
        grid_changed: previous.cols != next.cols || previous.rows != next.rows,
        orientation_changed: previous.screen_orientation() != next.screen_orientation(),
        efficiency_delta: next.efficiency - previous.efficiency,
    }
}

/// Named easing curve for the caller's animation system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// CSS-compatible identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animation parameters for moving cards from one layout to the next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPlan {
    /// Per-card animation duration, always positive.
    pub recommended_duration_ms: u32,
    pub easing: Easing,
    /// Start offset between consecutive cards.
    pub stagger_delay_ms: u32,
}

/// Derive transition parameters from a layout change.
///
/// Restructuring (new grid shape or orientation) gets a slower
/// `ease-in-out`; a plain resize a short `ease-out`. The stagger shrinks as
/// the next grid grows so the cascade stays within a fixed total.
pub fn plan_transition(previous: &GridLayout, next: &GridLayout) -> TransitionPlan {
    let comparison = compare(previous, next);
    let (recommended_duration_ms, easing) = if comparison.is_restructure() {
        (RESTRUCTURE_DURATION_MS, Easing::EaseInOut)
    } else {
        (RESIZE_DURATION_MS, Easing::EaseOut)
    };
    let cells = next.cols.saturating_mul(next.rows).max(1);
    TransitionPlan {
        recommended_duration_ms,
        easing,
        stagger_delay_ms: (STAGGER_BUDGET_MS / cells).min(MAX_STAGGER_MS),
    }
}
