use std::collections::BTreeMap;

use crate::{
    core::{Millis, Vec2},
    model::{Group, RevealDecl, ScrollBinding, ScrollToggle},
    props::StyleProps,
    spec::EntranceSpec,
};

/// Lifecycle of a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One observed visibility change, as delivered by the host or a
/// [`crate::observer::Watcher`] sweep.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionEvent {
    pub id: String,
    pub is_intersecting: bool,
    /// Fraction of the element's area inside the (margin-adjusted) root,
    /// in [0, 1].
    pub ratio: f64,
}

/// One scroll reading in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub offset: Vec2,
}

impl ScrollSample {
    pub fn vertical(y: f64) -> Self {
        Self {
            offset: Vec2::new(0.0, y),
        }
    }
}

/// The engine's entire output surface. Actions are fire-and-forget
/// instructions for whatever plays animations; the engine never waits on
/// playback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Begin the entrance for `id` after `delay` (stagger already folded
    /// in).
    StartEntrance {
        id: String,
        spec: EntranceSpec,
        delay: Millis,
    },
    /// Reversible activation for non-one-shot registrations and scroll
    /// toggles.
    SetActive { id: String, active: bool },
    /// Set continuous properties derived from scroll progress.
    Apply { id: String, props: StyleProps },
    /// The element no longer needs observation; the host should stop
    /// watching it.
    Release { id: String },
}

#[derive(Clone, Debug)]
struct Registration {
    decl: RevealDecl,
    stagger_index: usize,
    state: RevealState,
    active: bool,
}

#[derive(Clone, Debug)]
struct ToggleState {
    toggle: ScrollToggle,
    active: bool,
}

/// Decides when entrances fire.
///
/// Owns per-element state and nothing else: geometry and scroll offsets
/// always arrive as arguments. Feed it [`IntersectionEvent`]s and
/// [`ScrollSample`]s, hand the returned [`Action`]s to a runner.
#[derive(Clone, Debug, Default)]
pub struct RevealEngine {
    registrations: BTreeMap<String, Registration>,
    bindings: Vec<ScrollBinding>,
    toggles: Vec<ToggleState>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single declaration with stagger index 0.
    ///
    /// A threshold outside [0, 1] is clamped, never rejected; NaN falls
    /// back to 0. Re-registering an existing id is a no-op.
    pub fn register(&mut self, decl: RevealDecl) {
        self.register_indexed(decl, 0);
    }

    /// Registers every member of `group` in order; each member's stagger
    /// index is its position in the group, fixed here and unaffected by
    /// later unregisters.
    pub fn register_group(&mut self, group: Group) {
        for (index, decl) in group.members.into_iter().enumerate() {
            self.register_indexed(decl, index);
        }
    }

    fn register_indexed(&mut self, mut decl: RevealDecl, stagger_index: usize) {
        if self.registrations.contains_key(&decl.id) {
            tracing::debug!(id = %decl.id, "already registered, ignoring");
            return;
        }
        decl.threshold = if decl.threshold.is_nan() {
            0.0
        } else {
            decl.threshold.clamp(0.0, 1.0)
        };
        tracing::trace!(id = %decl.id, threshold = decl.threshold, stagger_index, "register");
        self.registrations.insert(
            decl.id.clone(),
            Registration {
                decl,
                stagger_index,
                state: RevealState::Pending,
                active: false,
            },
        );
    }

    /// Removes a registration. Unknown ids are a no-op, so double
    /// unregister and unregister-before-register are both safe.
    pub fn unregister(&mut self, id: &str) {
        if self.registrations.remove(id).is_some() {
            tracing::trace!(id, "unregister");
        }
    }

    /// Adds a continuous scroll binding, driven by [`Self::on_scroll`].
    pub fn bind(&mut self, binding: ScrollBinding) {
        self.bindings.push(binding);
    }

    /// Adds a reversible offset toggle, driven by [`Self::on_scroll`].
    pub fn add_toggle(&mut self, toggle: ScrollToggle) {
        self.toggles.push(ToggleState {
            toggle,
            active: false,
        });
    }

    /// Processes one visibility change.
    ///
    /// One-shot registrations transition `Pending -> Revealed` the first
    /// time they intersect at or above their threshold, emit a single
    /// `StartEntrance`, and are released (immediately, or on completion
    /// for `release_on_complete`). Non-one-shot registrations emit
    /// `SetActive` on every effective change, in both directions. Events
    /// for unknown ids are ignored.
    #[tracing::instrument(skip(self, event), fields(id = %event.id))]
    pub fn on_intersection(&mut self, event: &IntersectionEvent) -> Vec<Action> {
        let mut actions = Vec::new();
        self.intersect_into(event, &mut actions);
        actions
    }

    /// Processes a delivery batch in order. Ordering across elements
    /// follows delivery order; the only cross-call guarantee is
    /// per-element at-most-once firing.
    pub fn on_batch(&mut self, events: &[IntersectionEvent]) -> Vec<Action> {
        let mut actions = Vec::new();
        for event in events {
            self.intersect_into(event, &mut actions);
        }
        actions
    }

    fn intersect_into(&mut self, event: &IntersectionEvent, actions: &mut Vec<Action>) {
        let Some(reg) = self.registrations.get_mut(&event.id) else {
            tracing::trace!(id = %event.id, "event for unknown id ignored");
            return;
        };

        let above = event.is_intersecting && event.ratio >= reg.decl.threshold;

        if reg.decl.one_shot {
            if reg.state == RevealState::Pending && above {
                reg.state = RevealState::Revealed;
                let delay = reg.decl.entrance.start_delay(reg.stagger_index);
                tracing::debug!(id = %event.id, ratio = event.ratio, "entrance fired");
                actions.push(Action::StartEntrance {
                    id: event.id.clone(),
                    spec: reg.decl.entrance,
                    delay,
                });
                if !reg.decl.release_on_complete {
                    self.registrations.remove(&event.id);
                    actions.push(Action::Release {
                        id: event.id.clone(),
                    });
                }
            }
        } else if above != reg.active {
            reg.active = above;
            reg.state = if above {
                RevealState::Revealed
            } else {
                RevealState::Pending
            };
            actions.push(Action::SetActive {
                id: event.id.clone(),
                active: above,
            });
        }
    }

    /// Drives scroll bindings and offset toggles from one sample.
    ///
    /// Bindings re-derive their properties on every sample; toggles emit
    /// `SetActive` only when the offset crosses their activation line.
    #[tracing::instrument(skip(self))]
    pub fn on_scroll(&mut self, sample: ScrollSample) -> Vec<Action> {
        let mut actions = Vec::new();

        for state in &mut self.toggles {
            let active = sample.offset.y > state.toggle.activate_above_px;
            if active != state.active {
                state.active = active;
                actions.push(Action::SetActive {
                    id: state.toggle.id.clone(),
                    active,
                });
            }
        }

        for binding in &self.bindings {
            actions.push(Action::Apply {
                id: binding.id.clone(),
                props: binding.props_at(sample.offset.y),
            });
        }

        actions
    }

    /// Completion hook from the runner. Registrations that fired with
    /// `release_on_complete` are released here; anything else is a no-op.
    pub fn on_transition_complete(&mut self, id: &str) -> Vec<Action> {
        let release = match self.registrations.get(id) {
            Some(reg) => {
                reg.decl.one_shot
                    && reg.decl.release_on_complete
                    && reg.state == RevealState::Revealed
            }
            None => false,
        };
        if !release {
            return Vec::new();
        }
        self.registrations.remove(id);
        tracing::debug!(id, "released after completion");
        vec![Action::Release { id: id.to_string() }]
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.registrations.get(id).map(|r| r.state)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registrations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
