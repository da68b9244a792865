//! Grid layout computation for a deck of cards.
//!
//! Searches candidate `cols × rows` grids for the one that covers the most
//! usable container area with cards, then places every card at the centre
//! of its cell. Pure geometry, no state between calls.
//!
//! # Example
//!
//! ```
//! use cardgrid::{DeviceOrientation, DeviceType, LayoutConfig};
//!
//! let layout = LayoutConfig::new(800.0, 600.0, 12, DeviceType::Desktop)
//!     .device_orientation(DeviceOrientation::Landscape)
//!     .compute()
//!     .expect("12 cards fit in 800×600");
//!
//! assert_eq!((layout.cols, layout.rows), (4, 3));
//! assert_eq!(layout.positions.len(), 12);
//! assert!(layout.efficiency > 0.9 && layout.efficiency <= 1.0);
//! ```
//!
//! # Search
//!
//! ```text
//!     container ┌──────────────────────────────┐
//!               │ padding                      │
//!               │   ┌────┐ gap ┌────┐     ┌────┐│
//!               │   │ 0  │     │ 1  │ ... │c-1 ││  row-major,
//!               │   └────┘     └────┘     └────┘│  block centred
//!               │   ┌────┐                     │
//!               │   │ c  │ ...                 │
//!               │   └────┘                     │
//!               └──────────────────────────────┘
//! ```
//!
//! For each column count the row count is the smallest that holds the deck.
//! Card width and height are the largest that fit with minimum spacing,
//! capped at the maximum size. Candidates below the minimum size are
//! dropped. Ranking is by efficiency, then orientation bias, then wasted
//! cells, then squareness.

use alloc::vec::Vec;

use num_traits::Float;

use crate::constraint::{DeviceType, GridConstraints, MAX_CARD_COUNT, MIN_CARD_COUNT};
use crate::orientation::{DeviceOrientation, OrientationBias, ScreenOrientation};

/// Efficiency values closer than this are treated as equal during ranking.
const EFFICIENCY_TIE: f64 = 1e-9;
/// Below this efficiency a layout gets a [`LayoutWarning::LowEfficiency`].
pub const LOW_EFFICIENCY_THRESHOLD: f64 = 0.75;
/// Slack for float comparisons in [`GridLayout::validate`].
const GEOMETRY_EPSILON: f64 = 1e-6;

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Card dimensions shared by every card of a layout.
pub type CardSize = Extent;

/// Gap between neighbouring cards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

/// Placement of one card. `x`/`y` is the card centre.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CardPosition {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Device context the layout was requested for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetadata {
    pub device_type: DeviceType,
    /// `None` when the device did not report a recognizable orientation.
    pub device_orientation: Option<DeviceOrientation>,
}

/// Input to the layout engine.
///
/// Built with [`LayoutConfig::new`], which starts from the device's base
/// constraints, and refined with the builder methods.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub container_width: f64,
    pub container_height: f64,
    pub card_count: u32,
    pub constraints: GridConstraints,
    pub metadata: LayoutMetadata,
}

impl LayoutConfig {
    pub fn new(
        container_width: f64,
        container_height: f64,
        card_count: u32,
        device_type: DeviceType,
    ) -> Self {
        Self {
            container_width,
            container_height,
            card_count,
            constraints: GridConstraints::for_device(device_type),
            metadata: LayoutMetadata {
                device_type,
                device_orientation: None,
            },
        }
    }

    /// Replace the size constraints.
    pub fn constraints(mut self, constraints: GridConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the orientation reported by the device.
    pub fn device_orientation(mut self, orientation: DeviceOrientation) -> Self {
        self.metadata.device_orientation = Some(orientation);
        self
    }

    /// Set new container dimensions, keeping everything else.
    pub fn resized(mut self, container_width: f64, container_height: f64) -> Self {
        self.container_width = container_width;
        self.container_height = container_height;
        self
    }

    pub fn container(&self) -> Extent {
        Extent::new(self.container_width, self.container_height)
    }

    /// Orientation of the container, with the device orientation as tiebreak.
    pub fn screen_orientation(&self) -> ScreenOrientation {
        ScreenOrientation::from_dimensions(
            self.container_width,
            self.container_height,
            self.metadata.device_orientation,
        )
    }

    /// Compute the layout. See [`calculate_layout`].
    pub fn compute(&self) -> Option<GridLayout> {
        calculate_layout(self)
    }
}

/// Computed grid for a deck of cards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    /// Size of every card.
    pub card: CardSize,
    /// Gaps actually used between cards.
    pub spacing: Spacing,
    /// One entry per card, in input order.
    pub positions: Vec<CardPosition>,
    /// Card area over usable container area, in `(0, 1]`.
    pub efficiency: f64,
    /// Container the layout was computed for.
    pub container: Extent,
    /// Normalized constraints the layout was computed with.
    pub constraints: GridConstraints,
    pub metadata: LayoutMetadata,
}

impl GridLayout {
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }

    /// Grid cells left without a card.
    pub fn wasted_cells(&self) -> u32 {
        let cells = self.cols as u64 * self.rows as u64;
        cells.saturating_sub(self.positions.len() as u64).min(u32::MAX as u64) as u32
    }

    /// Orientation implied by the container this layout was computed for.
    pub fn screen_orientation(&self) -> ScreenOrientation {
        ScreenOrientation::from_dimensions(
            self.container.width,
            self.container.height,
            self.metadata.device_orientation,
        )
    }

    /// Self-check. See [`validate_layout`].
    pub fn validate(&self) -> LayoutReport {
        validate_layout(self)
    }
}

/// A scored grid shape during the search.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    cols: u32,
    rows: u32,
    width: f64,
    height: f64,
    efficiency: f64,
}

impl Candidate {
    fn waste(&self, card_count: u32) -> u32 {
        self.cols * self.rows - card_count
    }

    /// Whether `self` ranks strictly above `other`.
    fn beats(&self, other: &Self, bias: OrientationBias, card_count: u32) -> bool {
        if Float::abs(self.efficiency - other.efficiency) > EFFICIENCY_TIE {
            return self.efficiency > other.efficiency;
        }
        let (mine, theirs) = (
            bias.prefers(self.cols, self.rows),
            bias.prefers(other.cols, other.rows),
        );
        if mine != theirs {
            return mine;
        }
        let (mine, theirs) = (self.waste(card_count), other.waste(card_count));
        if mine != theirs {
            return mine < theirs;
        }
        self.cols.abs_diff(self.rows) < other.cols.abs_diff(other.rows)
    }
}

/// Largest card extent along one axis for `tracks` cards, or `None` when it
/// falls below the minimum card size or is not positive.
fn track_extent(usable: f64, tracks: u32, c: &GridConstraints) -> Option<f64> {
    let gaps = (tracks - 1) as f64;
    let raw = (usable - gaps * c.min_spacing) / tracks as f64;
    // Also rejects NaN.
    if !(raw > 0.0 && raw >= c.min_card_size) {
        return None;
    }
    Some(raw.min(c.max_card_size))
}

fn evaluate(
    cols: u32,
    rows: u32,
    card_count: u32,
    usable: Extent,
    c: &GridConstraints,
) -> Option<Candidate> {
    let width = track_extent(usable.width, cols, c)?;
    let height = track_extent(usable.height, rows, c)?;
    let covered = card_count as f64 * width * height;
    let efficiency = (covered / (usable.width * usable.height)).min(1.0);
    Some(Candidate {
        cols,
        rows,
        width,
        height,
        efficiency,
    })
}

/// Gap along one axis: leftover space spread over the gaps, within bounds.
fn track_spacing(usable: f64, tracks: u32, card: f64, c: &GridConstraints) -> f64 {
    if tracks < 2 {
        return 0.0;
    }
    let leftover = usable - tracks as f64 * card;
    (leftover / (tracks - 1) as f64).clamp(c.min_spacing, c.max_spacing)
}

/// Compute the best grid for `config`.
///
/// Returns `None` when no layout is possible: a non-positive or non-finite
/// container dimension, a card count outside `1..=100`, padding that leaves
/// no usable area, or a container too small for even one grid at the
/// minimum card size. Mildly inconsistent constraints are normalized first.
///
/// Identical input always yields identical output.
pub fn calculate_layout(config: &LayoutConfig) -> Option<GridLayout> {
    let container = config.container();
    let has_area = container.width > 0.0
        && container.height > 0.0
        && container.width.is_finite()
        && container.height.is_finite();
    if !has_area {
        log::debug!(
            "no layout: container {}x{} has no area",
            container.width,
            container.height
        );
        return None;
    }
    let card_count = config.card_count;
    if !(MIN_CARD_COUNT..=MAX_CARD_COUNT).contains(&card_count) {
        log::debug!("no layout: card count {card_count} out of range");
        return None;
    }

    let c = config.constraints.normalized();
    let usable = Extent::new(
        container.width - 2.0 * c.padding,
        container.height - 2.0 * c.padding,
    );
    if !(usable.width > 0.0) || !(usable.height > 0.0) {
        log::debug!("no layout: padding {} consumes the container", c.padding);
        return None;
    }

    let orientation = config.screen_orientation();
    let bias = orientation.bias();

    let mut best: Option<Candidate> = None;
    for cols in 1..=card_count {
        let rows = card_count.div_ceil(cols);
        let Some(candidate) = evaluate(cols, rows, card_count, usable, &c) else {
            continue;
        };
        log::trace!(
            "candidate {cols}x{rows}: card {:.1}x{:.1}, efficiency {:.4}",
            candidate.width,
            candidate.height,
            candidate.efficiency
        );
        if best.is_none_or(|b| candidate.beats(&b, bias, card_count)) {
            best = Some(candidate);
        }
    }

    let Some(best) = best else {
        log::debug!(
            "no layout: {card_count} cards do not fit {}x{} at min card size {}",
            container.width,
            container.height,
            c.min_card_size
        );
        return None;
    };

    let spacing = Spacing {
        horizontal: track_spacing(usable.width, best.cols, best.width, &c),
        vertical: track_spacing(usable.height, best.rows, best.height, &c),
    };
    let block = Extent::new(
        best.cols as f64 * best.width + (best.cols - 1) as f64 * spacing.horizontal,
        best.rows as f64 * best.height + (best.rows - 1) as f64 * spacing.vertical,
    );
    let origin_x = (c.padding + (usable.width - block.width) / 2.0).max(0.0);
    let origin_y = (c.padding + (usable.height - block.height) / 2.0).max(0.0);
    let step_x = best.width + spacing.horizontal;
    let step_y = best.height + spacing.vertical;

    let positions = (0..card_count)
        .map(|i| {
            let col = (i % best.cols) as f64;
            let row = (i / best.cols) as f64;
            CardPosition {
                x: origin_x + col * step_x + best.width / 2.0,
                y: origin_y + row * step_y + best.height / 2.0,
                width: best.width,
                height: best.height,
            }
        })
        .collect();

    log::debug!(
        "layout {}x{} for {card_count} cards in {}x{} ({orientation:?}): card {:.1}x{:.1}, efficiency {:.3}",
        best.cols,
        best.rows,
        container.width,
        container.height,
        best.width,
        best.height,
        best.efficiency
    );

    Some(GridLayout {
        cols: best.cols,
        rows: best.rows,
        card: CardSize::new(best.width, best.height),
        spacing,
        positions,
        efficiency: best.efficiency,
        container,
        constraints: c,
        metadata: config.metadata,
    })
}

/// Broken invariant found by [`validate_layout`].
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutViolation {
    #[error("grid has no tracks ({cols}x{rows})")]
    EmptyGrid { cols: u32, rows: u32 },
    #[error("grid {cols}x{rows} has fewer cells than {cards} cards")]
    TooFewCells { cols: u32, rows: u32, cards: usize },
    #[error("card size {width}x{height} outside [{min}, {max}]")]
    CardSizeOutOfBounds {
        width: f64,
        height: f64,
        min: f64,
        max: f64,
    },
    #[error("card {index} size differs from the layout card size")]
    PositionSizeMismatch { index: usize },
    #[error("card {index} extends outside the container")]
    OutsideContainer { index: usize },
    #[error("efficiency {efficiency} outside (0, 1]")]
    EfficiencyOutOfRange { efficiency: f64 },
}

/// Quality concern with an otherwise usable layout.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutWarning {
    #[error("low efficiency: cards cover {:.0}% of the usable area", .efficiency * 100.0)]
    LowEfficiency { efficiency: f64 },
    #[error("degenerate {cols}x{rows} grid: all cards in a single track")]
    DegenerateStrip { cols: u32, rows: u32 },
}

/// Outcome of [`validate_layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutReport {
    /// True when `violations` is empty.
    pub is_valid: bool,
    pub violations: Vec<LayoutViolation>,
    pub warnings: Vec<LayoutWarning>,
    pub efficiency: f64,
    pub orientation: ScreenOrientation,
}

/// Check a layout against the [`GridLayout`] invariants.
///
/// Layouts from [`calculate_layout`] always pass; this is meant for layouts
/// built or deserialized elsewhere. Warnings never affect `is_valid`.
pub fn validate_layout(layout: &GridLayout) -> LayoutReport {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();
    let cards = layout.positions.len();
    let c = &layout.constraints;

    if layout.cols == 0 || layout.rows == 0 {
        violations.push(LayoutViolation::EmptyGrid {
            cols: layout.cols,
            rows: layout.rows,
        });
    } else if (layout.cols as u64) * (layout.rows as u64) < cards as u64 {
        violations.push(LayoutViolation::TooFewCells {
            cols: layout.cols,
            rows: layout.rows,
            cards,
        });
    }

    let in_bounds = |v: f64| {
        v >= c.min_card_size - GEOMETRY_EPSILON && v <= c.max_card_size + GEOMETRY_EPSILON
    };
    if !in_bounds(layout.card.width) || !in_bounds(layout.card.height) {
        violations.push(LayoutViolation::CardSizeOutOfBounds {
            width: layout.card.width,
            height: layout.card.height,
            min: c.min_card_size,
            max: c.max_card_size,
        });
    }

    for (index, p) in layout.positions.iter().enumerate() {
        if Float::abs(p.width - layout.card.width) > GEOMETRY_EPSILON
            || Float::abs(p.height - layout.card.height) > GEOMETRY_EPSILON
        {
            violations.push(LayoutViolation::PositionSizeMismatch { index });
        }
        let inside = p.left() >= -GEOMETRY_EPSILON
            && p.top() >= -GEOMETRY_EPSILON
            && p.right() <= layout.container.width + GEOMETRY_EPSILON
            && p.bottom() <= layout.container.height + GEOMETRY_EPSILON;
        if !inside {
            violations.push(LayoutViolation::OutsideContainer { index });
        }
    }

    if !(layout.efficiency > 0.0 && layout.efficiency <= 1.0) {
        violations.push(LayoutViolation::EfficiencyOutOfRange {
            efficiency: layout.efficiency,
        });
    }

    if layout.efficiency < LOW_EFFICIENCY_THRESHOLD {
        warnings.push(LayoutWarning::LowEfficiency {
            efficiency: layout.efficiency,
        });
    }
    if (layout.cols == 1 || layout.rows == 1) && cards > 3 {
        warnings.push(LayoutWarning::DegenerateStrip {
            cols: layout.cols,
            rows: layout.rows,
        });
    }

    LayoutReport {
        is_valid: violations.is_empty(),
        violations,
        warnings,
        efficiency: layout.efficiency,
        orientation: layout.screen_orientation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn desktop(w: f64, h: f64, n: u32) -> LayoutConfig {
        LayoutConfig::new(w, h, n, DeviceType::Desktop)
    }

    fn assert_inside(layout: &GridLayout) {
        for (i, p) in layout.positions.iter().enumerate() {
            assert!(p.left() >= -1e-9, "card {i} left {}", p.left());
            assert!(p.top() >= -1e-9, "card {i} top {}", p.top());
            assert!(
                p.right() <= layout.container.width + 1e-9,
                "card {i} right {}",
                p.right()
            );
            assert!(
                p.bottom() <= layout.container.height + 1e-9,
                "card {i} bottom {}",
                p.bottom()
            );
        }
    }

    // ── "no layout" outcomes ────────────────────────────────────────────

    #[test]
    fn zero_container_is_none() {
        assert!(calculate_layout(&desktop(0.0, 600.0, 12)).is_none());
        assert!(calculate_layout(&desktop(800.0, 0.0, 12)).is_none());
        assert!(calculate_layout(&desktop(-5.0, 600.0, 12)).is_none());
        assert!(calculate_layout(&desktop(f64::NAN, 600.0, 12)).is_none());
    }

    #[test]
    fn card_count_out_of_range_is_none() {
        assert!(calculate_layout(&desktop(800.0, 600.0, 0)).is_none());
        assert!(calculate_layout(&desktop(8000.0, 6000.0, 101)).is_none());
    }

    #[test]
    fn zero_min_card_size_never_yields_empty_cards() {
        // One 10px gap fills the 10px axis for both 1×2 and 2×1.
        let no_min = GridConstraints::new(0.0, 100.0, 10.0, 10.0, 0.0);
        assert!(calculate_layout(&desktop(10.0, 10.0, 2).constraints(no_min)).is_none());

        let layout = calculate_layout(&desktop(30.0, 10.0, 2).constraints(no_min)).unwrap();
        assert!(layout.card.width > 0.0 && layout.card.height > 0.0);
        assert!(layout.efficiency > 0.0);
        assert!(layout.validate().is_valid);
    }

    #[test]
    fn infinite_padding_is_none() {
        let config = desktop(800.0, 600.0, 12).constraints(GridConstraints {
            padding: f64::INFINITY,
            ..GridConstraints::DESKTOP
        });
        assert!(calculate_layout(&config).is_none());
    }

    #[test]
    fn wasted_cells_does_not_overflow() {
        let mut layout = calculate_layout(&desktop(800.0, 600.0, 12)).unwrap();
        assert_eq!(layout.wasted_cells(), 0);
        layout.cols = u32::MAX;
        layout.rows = 2;
        assert_eq!(layout.wasted_cells(), u32::MAX);
        assert_eq!(layout.validate().efficiency, layout.efficiency);
    }

    #[test]
    fn padding_consuming_container_is_none() {
        let config = desktop(40.0, 600.0, 1);
        assert!(calculate_layout(&config).is_none());
    }

    #[test]
    fn too_small_for_min_card_is_none() {
        // Desktop min card 100, usable 252×252 → at most 2×2 cards.
        assert!(calculate_layout(&desktop(300.0, 300.0, 5)).is_none());
        assert!(calculate_layout(&desktop(300.0, 300.0, 4)).is_some());
    }

    // ── search ──────────────────────────────────────────────────────────

    #[test]
    fn desktop_landscape_twelve_cards() {
        let layout = desktop(800.0, 600.0, 12)
            .device_orientation(DeviceOrientation::Landscape)
            .compute()
            .unwrap();
        assert_eq!((layout.cols, layout.rows), (4, 3));
        // usable 752×552: width (752 − 24) / 4, height (552 − 16) / 3.
        assert_eq!(layout.card.width, 182.0);
        assert!((layout.card.height - 536.0 / 3.0).abs() < 1e-9);
        assert!(layout.efficiency > 0.9 && layout.efficiency <= 1.0);
        assert_eq!(layout.positions.len(), 12);
        assert_inside(&layout);
    }

    #[test]
    fn portrait_container_prefers_rows() {
        let layout = desktop(600.0, 800.0, 12).compute().unwrap();
        assert!(layout.rows >= layout.cols, "{}x{}", layout.cols, layout.rows);
        assert_eq!(layout.screen_orientation(), ScreenOrientation::Portrait);
    }

    #[test]
    fn clamped_ties_follow_orientation_bias() {
        // Huge container: every candidate is capped at max size, so the
        // efficiency ties and the bias decides.
        let landscape = desktop(4000.0, 4000.0, 12)
            .device_orientation(DeviceOrientation::Landscape)
            .compute()
            .unwrap();
        assert!(landscape.cols >= landscape.rows);
        assert_eq!(landscape.wasted_cells(), 0);

        let portrait = desktop(4000.0, 4000.0, 12)
            .device_orientation(DeviceOrientation::Portrait)
            .compute()
            .unwrap();
        assert!(portrait.rows >= portrait.cols);
        assert_eq!(portrait.wasted_cells(), 0);
    }

    #[test]
    fn clamped_square_tie_is_balanced() {
        let layout = desktop(4000.0, 4000.0, 12).compute().unwrap();
        assert!(layout.cols.abs_diff(layout.rows) <= 1);
        assert_eq!(layout.card.width, 200.0);
        assert_eq!(layout.card.height, 200.0);
    }

    #[test]
    fn single_card_is_centred() {
        let layout = desktop(800.0, 600.0, 1).compute().unwrap();
        assert_eq!((layout.cols, layout.rows), (1, 1));
        let p = layout.positions[0];
        assert_eq!((p.x, p.y), (400.0, 300.0));
        assert_eq!(layout.spacing.horizontal, 0.0);
        assert_eq!(layout.spacing.vertical, 0.0);
    }

    #[test]
    fn odd_count_uses_partial_last_row() {
        let layout = desktop(1280.0, 800.0, 7).compute().unwrap();
        assert!(layout.cols * layout.rows >= 7);
        // Row-major fill never leaves a whole row empty.
        assert!((layout.rows - 1) * layout.cols < 7);
        assert_eq!(layout.positions.len(), 7);
        assert_inside(&layout);
    }

    #[test]
    fn positions_are_row_major() {
        let layout = desktop(800.0, 600.0, 12)
            .device_orientation(DeviceOrientation::Landscape)
            .compute()
            .unwrap();
        let p = &layout.positions;
        // Same row → same y, increasing x.
        assert_eq!(p[0].y, p[3].y);
        assert!(p[1].x > p[0].x);
        // Next row starts under the first card.
        assert_eq!(p[4].x, p[0].x);
        assert!(p[4].y > p[0].y);
    }

    #[test]
    fn block_is_centred() {
        let layout = desktop(1000.0, 700.0, 6).compute().unwrap();
        let left = layout.positions.iter().map(|p| p.left()).fold(f64::MAX, f64::min);
        let right = layout.positions.iter().map(|p| p.right()).fold(f64::MIN, f64::max);
        let top = layout.positions.iter().map(|p| p.top()).fold(f64::MAX, f64::min);
        let bottom = layout.positions.iter().map(|p| p.bottom()).fold(f64::MIN, f64::max);
        assert!((left - (1000.0 - right)).abs() < 1e-9);
        assert!((top - (700.0 - bottom)).abs() < 1e-9);
    }

    #[test]
    fn spacing_stays_in_bounds() {
        let layout = desktop(4000.0, 3000.0, 20).compute().unwrap();
        let c = layout.constraints;
        assert!(layout.spacing.horizontal >= c.min_spacing);
        assert!(layout.spacing.horizontal <= c.max_spacing);
        assert!(layout.spacing.vertical >= c.min_spacing);
        assert!(layout.spacing.vertical <= c.max_spacing);
    }

    #[test]
    fn inverted_constraints_are_clamped() {
        let layout = desktop(800.0, 600.0, 12)
            .constraints(GridConstraints::new(120.0, 80.0, 10.0, 2.0, 0.0))
            .compute()
            .unwrap();
        assert_eq!(layout.card.width, 120.0);
        assert_eq!(layout.card.height, 120.0);
        assert!(layout.validate().is_valid);
    }

    #[test]
    fn deterministic() {
        let config = LayoutConfig::new(1024.0, 768.0, 30, DeviceType::Tablet);
        let a = calculate_layout(&config).unwrap();
        let b = calculate_layout(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.efficiency.to_bits(), b.efficiency.to_bits());
    }

    // ── validate_layout ─────────────────────────────────────────────────

    #[test]
    fn computed_layout_validates() {
        let layout = desktop(800.0, 600.0, 12).compute().unwrap();
        let report = validate_layout(&layout);
        assert!(report.is_valid, "{:?}", report.violations);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(report.efficiency, layout.efficiency);
        assert_eq!(report.orientation, ScreenOrientation::Landscape);
    }

    #[test]
    fn low_efficiency_warns() {
        // Capped at 200×200 in a big container → tiny coverage.
        let layout = desktop(4000.0, 4000.0, 4).compute().unwrap();
        let report = layout.validate();
        assert!(report.is_valid);
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.to_string().contains("efficiency"))
        );
    }

    #[test]
    fn single_track_warns() {
        let layout = desktop(2000.0, 300.0, 5).compute().unwrap();
        assert_eq!(layout.rows, 1);
        let report = layout.validate();
        assert!(
            report
                .warnings
                .contains(&LayoutWarning::DegenerateStrip { cols: 5, rows: 1 })
        );
    }

    #[test]
    fn tampered_layout_is_invalid() {
        let mut layout = desktop(800.0, 600.0, 12).compute().unwrap();
        layout.rows = 2;
        layout.positions[5].x = 10_000.0;
        layout.positions[6].width = 1.0;
        layout.efficiency = 1.5;
        let report = layout.validate();
        assert!(!report.is_valid);
        assert!(report.violations.contains(&LayoutViolation::TooFewCells {
            cols: 4,
            rows: 2,
            cards: 12
        }));
        assert!(
            report
                .violations
                .contains(&LayoutViolation::OutsideContainer { index: 5 })
        );
        assert!(
            report
                .violations
                .contains(&LayoutViolation::PositionSizeMismatch { index: 6 })
        );
        assert!(report.violations.contains(&LayoutViolation::EfficiencyOutOfRange {
            efficiency: 1.5
        }));
    }

    #[test]
    fn empty_grid_is_invalid() {
        let mut layout = desktop(800.0, 600.0, 2).compute().unwrap();
        layout.cols = 0;
        let report = layout.validate();
        assert!(!report.is_valid);
        assert!(matches!(
            report.violations[0],
            LayoutViolation::EmptyGrid { cols: 0, .. }
        ));
    }
}
