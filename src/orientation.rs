//! Screen orientation classification and the grid-search bias derived from it.
//!
//! The aspect ratio is the strong signal. The orientation reported by the
//! device only decides inside the ambiguous band around 1:1.
//!
//! ```text
//!     aspect = width / height
//!
//!     0 ──────── 0.8 ════════════ 1.2 ──────── ∞
//!      portrait  │  device hint   │  landscape
//!                │ (None → square)│
//! ```

/// Orientation as reported by the device (screen orientation API, sensors).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceOrientation {
    Portrait,
    Landscape,
}

impl DeviceOrientation {
    /// Parse a reported orientation value.
    ///
    /// Accepts `portrait` / `landscape` and the `-primary` / `-secondary`
    /// forms of the screen orientation API, case-insensitively. Anything
    /// else is unrecognized and yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let base = match value.find('-') {
            Some(pos) => {
                let suffix = &value[pos + 1..];
                if !suffix.eq_ignore_ascii_case("primary")
                    && !suffix.eq_ignore_ascii_case("secondary")
                {
                    return None;
                }
                &value[..pos]
            }
            None => value,
        };
        if base.eq_ignore_ascii_case("portrait") {
            Some(Self::Portrait)
        } else if base.eq_ignore_ascii_case("landscape") {
            Some(Self::Landscape)
        } else {
            None
        }
    }
}

/// Orientation of the layout container, derived from its aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScreenOrientation {
    Portrait,
    Landscape,
    Square,
}

impl ScreenOrientation {
    /// Aspect ratios strictly below this are always portrait.
    pub const PORTRAIT_BELOW: f64 = 0.8;
    /// Aspect ratios strictly above this are always landscape.
    pub const LANDSCAPE_ABOVE: f64 = 1.2;

    /// Classify an aspect ratio (`width / height`).
    ///
    /// Outside `0.8..=1.2` the aspect ratio wins regardless of what the
    /// device reports. Inside the band the device orientation decides, and
    /// a missing or unrecognized device orientation means [`Square`](Self::Square).
    pub fn classify(aspect_ratio: f64, device: Option<DeviceOrientation>) -> Self {
        if aspect_ratio < Self::PORTRAIT_BELOW {
            Self::Portrait
        } else if aspect_ratio > Self::LANDSCAPE_ABOVE {
            Self::Landscape
        } else {
            match device {
                Some(DeviceOrientation::Portrait) => Self::Portrait,
                Some(DeviceOrientation::Landscape) => Self::Landscape,
                None => Self::Square,
            }
        }
    }

    /// Classify container dimensions.
    ///
    /// A zero height gives an infinite ratio (landscape); `0 / 0` is NaN and
    /// falls through to the device orientation.
    pub fn from_dimensions(width: f64, height: f64, device: Option<DeviceOrientation>) -> Self {
        Self::classify(width / height, device)
    }

    /// Row/column preference used as a tiebreak by the grid search.
    pub fn bias(self) -> OrientationBias {
        match self {
            Self::Portrait => OrientationBias::RowHeavy,
            Self::Landscape => OrientationBias::ColumnHeavy,
            Self::Square => OrientationBias::Balanced,
        }
    }
}

/// Soft preference for the shape of the grid.
///
/// Only consulted when two candidate grids cover the container equally well.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrientationBias {
    /// Prefer `rows >= cols`.
    RowHeavy,
    /// Prefer `cols >= rows`.
    ColumnHeavy,
    /// Prefer `|cols - rows| <= 1`.
    Balanced,
}

impl OrientationBias {
    /// Whether a `cols × rows` grid matches this preference.
    pub fn prefers(self, cols: u32, rows: u32) -> bool {
        match self {
            Self::RowHeavy => rows >= cols,
            Self::ColumnHeavy => cols >= rows,
            Self::Balanced => cols.abs_diff(rows) <= 1,
        }
    }
}
