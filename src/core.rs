pub use kurbo::{Point, Rect, Vec2};

/// A duration or delay in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub fn saturating_add(self, other: Millis) -> Millis {
        Millis(self.0.saturating_add(other.0))
    }

    pub fn saturating_mul(self, factor: u64) -> Millis {
        Millis(self.0.saturating_mul(factor))
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

/// The visible window the host scrolls through, in CSS-style pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Document-space rect covered by the viewport at a given scroll offset.
    pub fn rect(self, scroll: Vec2) -> Rect {
        Rect::new(
            scroll.x,
            scroll.y,
            scroll.x + self.width.max(0.0),
            scroll.y + self.height.max(0.0),
        )
    }
}

/// Signed pixel offsets expanding (positive) or contracting (negative) the
/// rect an intersection test runs against. The root-margin of a
/// registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl EdgeInsets {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Grows `rect` outward by the insets. A contraction larger than the
    /// rect collapses to a zero-area rect at its center rather than
    /// inverting.
    pub fn expand(self, rect: Rect) -> Rect {
        let mut x0 = rect.x0 - self.left;
        let mut x1 = rect.x1 + self.right;
        let mut y0 = rect.y0 - self.top;
        let mut y1 = rect.y1 + self.bottom;
        if x0 > x1 {
            let mid = rect.center().x;
            x0 = mid;
            x1 = mid;
        }
        if y0 > y1 {
            let mid = rect.center().y;
            y0 = mid;
            y1 = mid;
        }
        Rect::new(x0, y0, x1, y1)
    }
}

/// A tracked span of scroll offsets, `start..end` in pixels.
///
/// The constructor clamps `end` up to `start`; a misconfigured region is
/// degenerate, never an error, and a degenerate region reports progress 0
/// everywhere.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    pub start: f64,
    pub end: f64,
}

impl ScrollRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn is_degenerate(self) -> bool {
        self.end <= self.start
    }

    pub fn progress(self, current: f64) -> f64 {
        scroll_progress(self.start, self.end, current)
    }
}

/// Normalized progress of `current` through `[region_start, region_end]`.
///
/// Exactly 0 at or below `region_start`, exactly 1 at or above
/// `region_end`, monotonic in `current`. A degenerate region
/// (`region_end <= region_start`) reports 0 for every input.
pub fn scroll_progress(region_start: f64, region_end: f64, current: f64) -> f64 {
    let span = region_end - region_start;
    if !(span > 0.0) {
        return 0.0;
    }
    ((current - region_start) / span).clamp(0.0, 1.0)
}
