//! Recompute-on-demand driver and caller-clocked resize debouncing.
//!
//! The engine is a pure function; something still has to remember the
//! layout currently on screen so the next one can be compared against it.
//! [`LayoutPlanner`] is that something. [`ResizeDebounce`] collapses a burst
//! of resize events into one recompute without owning a timer: the caller
//! passes its own clock readings.
//!
//! # Example
//!
//! ```
//! use cardgrid::{DeviceType, LayoutConfig, LayoutPlanner, LayoutUpdate};
//!
//! let mut planner = LayoutPlanner::new();
//! let config = LayoutConfig::new(800.0, 600.0, 12, DeviceType::Desktop);
//!
//! assert!(matches!(planner.relayout(&config), LayoutUpdate::Initial));
//! assert!(matches!(planner.relayout(&config), LayoutUpdate::Unchanged));
//!
//! match planner.relayout(&config.resized(600.0, 800.0)) {
//!     LayoutUpdate::Changed { comparison, transition } => {
//!         assert!(comparison.orientation_changed);
//!         assert!(transition.recommended_duration_ms > 0);
//!     }
//!     other => panic!("expected a change, got {other:?}"),
//! }
//! assert_eq!(planner.current().unwrap().rows, 4);
//! ```

use crate::grid::{Extent, GridLayout, LayoutConfig, calculate_layout};
use crate::transition::{LayoutComparison, TransitionPlan, compare, plan_transition};

/// Quiet period used by [`ResizeDebounce::default`].
pub const DEFAULT_QUIET_MS: u64 = 150;

/// Result of [`LayoutPlanner::relayout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutUpdate {
    /// First layout; nothing to animate from.
    Initial,
    /// The layout changed; animate with `transition`.
    Changed {
        comparison: LayoutComparison,
        transition: TransitionPlan,
    },
    /// Recomputed layout is identical to the current one.
    Unchanged,
    /// No layout is possible for this config. The caller falls back to a
    /// non-grid presentation; the current layout has been dropped.
    Unavailable,
}

/// Holds the current layout and diffs each recompute against it.
#[derive(Clone, Debug, Default)]
pub struct LayoutPlanner {
    current: Option<GridLayout>,
}

impl LayoutPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout currently on screen, if any.
    pub fn current(&self) -> Option<&GridLayout> {
        self.current.as_ref()
    }

    /// Forget the current layout; the next relayout is [`LayoutUpdate::Initial`].
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Compute the layout for `config` and make it current.
    pub fn relayout(&mut self, config: &LayoutConfig) -> LayoutUpdate {
        let Some(next) = calculate_layout(config) else {
            self.current = None;
            return LayoutUpdate::Unavailable;
        };
        let update = match &self.current {
            None => LayoutUpdate::Initial,
            Some(previous) if *previous == next => LayoutUpdate::Unchanged,
            Some(previous) => LayoutUpdate::Changed {
                comparison: compare(previous, &next),
                transition: plan_transition(previous, &next),
            },
        };
        self.current = Some(next);
        update
    }
}

/// Trailing-edge debounce for container size changes.
///
/// ```
/// use cardgrid::{Extent, ResizeDebounce};
///
/// let mut debounce = ResizeDebounce::new(100);
/// debounce.record(0, Extent::new(800.0, 600.0));
/// debounce.record(40, Extent::new(820.0, 600.0));
/// assert_eq!(debounce.poll(120), None);
/// assert_eq!(debounce.poll(140), Some(Extent::new(820.0, 600.0)));
/// assert_eq!(debounce.poll(500), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeDebounce {
    quiet_ms: u64,
    pending: Option<(u64, Extent)>,
}

impl ResizeDebounce {
    pub const fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Note a resize event observed at `now_ms`. Later events replace
    /// earlier ones and restart the quiet period.
    pub fn record(&mut self, now_ms: u64, extent: Extent) {
        self.pending = Some((now_ms, extent));
    }

    /// The settled size, once no event arrived for the quiet period.
    /// Each settled size is returned once.
    pub fn poll(&mut self, now_ms: u64) -> Option<Extent> {
        let (at, extent) = self.pending?;
        if now_ms.saturating_sub(at) >= self.quiet_ms {
            self.pending = None;
            Some(extent)
        } else {
            None
        }
    }

    /// Whether an event is waiting to settle.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::DeviceType;

    fn config(w: f64, h: f64) -> LayoutConfig {
        LayoutConfig::new(w, h, 12, DeviceType::Desktop)
    }

    #[test]
    fn first_layout_is_initial() {
        let mut planner = LayoutPlanner::new();
        assert!(planner.current().is_none());
        assert_eq!(planner.relayout(&config(800.0, 600.0)), LayoutUpdate::Initial);
        assert_eq!(planner.current().unwrap().cols, 4);
    }

    #[test]
    fn same_config_is_unchanged() {
        let mut planner = LayoutPlanner::new();
        planner.relayout(&config(800.0, 600.0));
        assert_eq!(
            planner.relayout(&config(800.0, 600.0)),
            LayoutUpdate::Unchanged
        );
    }

    #[test]
    fn resize_reports_comparison() {
        let mut planner = LayoutPlanner::new();
        planner.relayout(&config(800.0, 600.0));
        match planner.relayout(&config(880.0, 640.0)) {
            LayoutUpdate::Changed {
                comparison,
                transition,
            } => {
                assert!(comparison.dimensions_changed);
                assert!(!comparison.grid_changed);
                assert!(transition.recommended_duration_ms > 0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(planner.current().unwrap().container.width, 880.0);
    }

    #[test]
    fn unavailable_drops_current() {
        let mut planner = LayoutPlanner::new();
        planner.relayout(&config(800.0, 600.0));
        assert_eq!(planner.relayout(&config(0.0, 600.0)), LayoutUpdate::Unavailable);
        assert!(planner.current().is_none());
        assert_eq!(planner.relayout(&config(800.0, 600.0)), LayoutUpdate::Initial);
    }

    #[test]
    fn reset_forgets_layout() {
        let mut planner = LayoutPlanner::new();
        planner.relayout(&config(800.0, 600.0));
        planner.reset();
        assert_eq!(planner.relayout(&config(800.0, 600.0)), LayoutUpdate::Initial);
    }

    #[test]
    fn debounce_waits_for_quiet_period() {
        let mut d = ResizeDebounce::default();
        assert_eq!(d.poll(0), None);
        d.record(10, Extent::new(500.0, 500.0));
        assert!(d.is_pending());
        assert_eq!(d.poll(100), None);
        d.record(100, Extent::new(510.0, 500.0));
        assert_eq!(d.poll(200), None);
        assert_eq!(d.poll(250), Some(Extent::new(510.0, 500.0)));
        assert!(!d.is_pending());
    }

    #[test]
    fn debounce_tolerates_clock_going_backwards() {
        let mut d = ResizeDebounce::new(50);
        d.record(1_000, Extent::new(300.0, 300.0));
        assert_eq!(d.poll(900), None);
        assert!(d.is_pending());
    }
}
