use crate::{
    core::{EdgeInsets, Viewport},
    error::SightlineResult,
    model::{Group, RevealDecl, Scene, ScrollBinding, ScrollToggle},
    spec::EntranceSpec,
};

pub struct SceneBuilder {
    viewport: Viewport,
    groups: Vec<Group>,
    bindings: Vec<ScrollBinding>,
    toggles: Vec<ScrollToggle>,
}

impl SceneBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            groups: Vec::new(),
            bindings: Vec::new(),
            toggles: Vec::new(),
        }
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn binding(mut self, binding: ScrollBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn toggle(mut self, id: impl Into<String>, activate_above_px: f64) -> Self {
        self.toggles.push(ScrollToggle {
            id: id.into(),
            activate_above_px,
        });
        self
    }

    pub fn build(self) -> SightlineResult<Scene> {
        let scene = Scene {
            viewport: self.viewport,
            groups: self.groups,
            bindings: self.bindings,
            toggles: self.toggles,
        };
        scene.validate()?;
        Ok(scene)
    }
}

pub struct GroupBuilder {
    name: String,
    members: Vec<RevealDecl>,
}

impl GroupBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, decl: RevealDecl) -> Self {
        self.members.push(decl);
        self
    }

    /// Adds `count` members sharing one entrance, ids `prefix-0` through
    /// `prefix-{count-1}`. The usual way to declare a staggered card
    /// grid.
    pub fn numbered(mut self, prefix: &str, count: usize, entrance: EntranceSpec) -> Self {
        for i in 0..count {
            self.members
                .push(RevealDecl::new(format!("{prefix}-{i}"), entrance));
        }
        self
    }

    pub fn build(self) -> Group {
        Group {
            name: self.name,
            members: self.members,
        }
    }
}

pub struct RevealBuilder {
    decl: RevealDecl,
}

impl RevealBuilder {
    pub fn new(id: impl Into<String>, entrance: EntranceSpec) -> Self {
        Self {
            decl: RevealDecl::new(id, entrance),
        }
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.decl.threshold = threshold;
        self
    }

    pub fn root_margin(mut self, margin: EdgeInsets) -> Self {
        self.decl.root_margin = margin;
        self
    }

    /// Switches to reversible toggling instead of a one-shot entrance.
    pub fn reversible(mut self) -> Self {
        self.decl.one_shot = false;
        self
    }

    pub fn release_on_complete(mut self) -> Self {
        self.decl.release_on_complete = true;
        self
    }

    pub fn build(self) -> RevealDecl {
        self.decl
    }
}
