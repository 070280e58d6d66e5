use crate::{
    core::{Vec2, Viewport},
    engine::{Action, RevealEngine, ScrollSample},
    error::SightlineResult,
    model::{Group, RevealDecl, Scene},
    observer::{LayoutMap, Watcher},
    runner::AnimationRunner,
};

/// A mounted scene: engine, watcher, and runner wired together.
///
/// The host owns the loop. It calls [`scroll_to`](Self::scroll_to) with
/// each new offset and [`complete`](Self::complete) when the runner
/// finishes an entrance; the session routes everything else.
#[derive(Debug)]
pub struct Session<R> {
    engine: RevealEngine,
    watcher: Watcher,
    runner: R,
    viewport: Viewport,
    layout: LayoutMap,
    scroll: Vec2,
}

impl<R: AnimationRunner> Session<R> {
    /// Validates the scene, then registers every declaration whose id
    /// appears in `layout`. Declarations without geometry are dropped
    /// with a debug trace rather than failing the mount, so a page
    /// missing an optional section still animates the rest.
    pub fn mount(scene: &Scene, layout: LayoutMap, runner: R) -> SightlineResult<Self> {
        scene.validate()?;

        let mut engine = RevealEngine::new();
        let mut watcher = Watcher::new();

        for group in &scene.groups {
            let present: Vec<RevealDecl> = group
                .members
                .iter()
                .filter(|decl| {
                    let found = layout.contains(&decl.id);
                    if !found {
                        tracing::debug!(id = %decl.id, group = %group.name, "no geometry, dropped");
                    }
                    found
                })
                .cloned()
                .collect();
            for decl in &present {
                watcher.watch(decl.id.clone(), decl.threshold, decl.root_margin);
            }
            engine.register_group(Group {
                name: group.name.clone(),
                members: present,
            });
        }

        for binding in &scene.bindings {
            if layout.contains(&binding.id) {
                engine.bind(binding.clone());
            } else {
                tracing::debug!(id = %binding.id, "no geometry, binding dropped");
            }
        }
        for toggle in &scene.toggles {
            if layout.contains(&toggle.id) {
                engine.add_toggle(toggle.clone());
            } else {
                tracing::debug!(id = %toggle.id, "no geometry, toggle dropped");
            }
        }

        Ok(Self {
            engine,
            watcher,
            runner,
            viewport: scene.viewport,
            layout,
            scroll: Vec2::ZERO,
        })
    }

    /// Advances the session to a new scroll offset: sweeps the watcher,
    /// feeds the events and the sample to the engine, and dispatches the
    /// resulting actions to the runner.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.scroll = offset;
        let events = self.watcher.sweep(&self.layout, self.viewport, offset);
        let mut actions = self.engine.on_batch(&events);
        actions.extend(self.engine.on_scroll(ScrollSample { offset }));
        self.dispatch(actions);
    }

    /// Runner callback: the entrance for `id` finished playing.
    pub fn complete(&mut self, id: &str) {
        let actions = self.engine.on_transition_complete(id);
        self.dispatch(actions);
    }

    /// Replaces element geometry after a relayout. Takes effect on the
    /// next `scroll_to`.
    pub fn update_layout(&mut self, layout: LayoutMap) {
        self.layout = layout;
    }

    /// Resizes the viewport. Takes effect on the next `scroll_to`.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::StartEntrance { id, spec, delay } => {
                    self.runner.start_entrance(&id, &spec, delay);
                }
                Action::SetActive { id, active } => self.runner.set_active(&id, active),
                Action::Apply { id, props } => self.runner.apply(&id, &props),
                Action::Release { id } => self.watcher.unwatch(&id),
            }
        }
    }
}
