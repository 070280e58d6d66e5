use std::collections::BTreeMap;

use crate::{
    core::{EdgeInsets, Rect, Vec2, Viewport},
    engine::IntersectionEvent,
};

/// Host-supplied element geometry: id to document-space rect.
///
/// The engine never discovers elements; the host rebuilds or patches this
/// map on mount and resize.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LayoutMap {
    rects: BTreeMap<String, Rect>,
}

impl LayoutMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn remove(&mut self, id: &str) {
        self.rects.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl FromIterator<(String, Rect)> for LayoutMap {
    fn from_iter<I: IntoIterator<Item = (String, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

/// Fraction of `element`'s area inside `root`, plus whether the two touch
/// at all.
///
/// A zero-area element reports ratio 1.0 whenever it touches the root and
/// 0.0 otherwise (the web-platform rule, so point-like markers still
/// trigger thresholds up to 1.0). Edge contact counts as intersecting
/// with ratio 0.0 for elements with area.
pub fn intersection_ratio(element: Rect, root: Rect) -> (bool, f64) {
    let ix0 = element.x0.max(root.x0);
    let ix1 = element.x1.min(root.x1);
    let iy0 = element.y0.max(root.y0);
    let iy1 = element.y1.min(root.y1);
    if !(ix0 <= ix1 && iy0 <= iy1) {
        return (false, 0.0);
    }

    let area = element.width() * element.height();
    if !(area > 0.0) {
        return (true, 1.0);
    }
    let overlap = (ix1 - ix0) * (iy1 - iy0);
    (true, (overlap / area).clamp(0.0, 1.0))
}

#[derive(Clone, Debug)]
struct Watch {
    threshold: f64,
    margin: EdgeInsets,
    /// `(is_intersecting, ratio >= threshold)` from the previous sweep.
    last: Option<(bool, bool)>,
}

/// Per-id watch list with change-only delivery.
///
/// `sweep` recomputes every watched element's intersection against the
/// margin-adjusted viewport and emits an event only when the
/// `(is_intersecting, above_threshold)` pair changed since the previous
/// sweep. The first sweep after `watch` always reports, mirroring an
/// observer's initial callback.
#[derive(Clone, Debug, Default)]
pub struct Watcher {
    watches: BTreeMap<String, Watch>,
}

impl Watcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, id: impl Into<String>, threshold: f64, margin: EdgeInsets) {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self.watches.insert(
            id.into(),
            Watch {
                threshold,
                margin,
                last: None,
            },
        );
    }

    /// Idempotent; unknown ids are a no-op.
    pub fn unwatch(&mut self, id: &str) {
        self.watches.remove(id);
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watches.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }

    /// One observation pass at the given scroll offset.
    ///
    /// Elements missing from `layout` are treated as departed, reporting
    /// a single leave event. They stay watched; if the layout regains
    /// them they report again.
    #[tracing::instrument(skip(self, layout))]
    pub fn sweep(
        &mut self,
        layout: &LayoutMap,
        viewport: Viewport,
        scroll: Vec2,
    ) -> Vec<IntersectionEvent> {
        let base = viewport.rect(scroll);
        let mut events = Vec::new();

        for (id, watch) in &mut self.watches {
            let (is_intersecting, ratio) = match layout.get(id) {
                Some(rect) => intersection_ratio(rect, watch.margin.expand(base)),
                None => (false, 0.0),
            };
            let key = (is_intersecting, ratio >= watch.threshold);
            if watch.last != Some(key) {
                watch.last = Some(key);
                events.push(IntersectionEvent {
                    id: id.clone(),
                    is_intersecting,
                    ratio,
                });
            }
        }

        events
    }
}
