use std::collections::BTreeSet;

use crate::{
    core::{EdgeInsets, ScrollRegion, Viewport},
    ease::Ease,
    error::{SightlineError, SightlineResult},
    props::StyleProps,
    spec::EntranceSpec,
};

fn default_threshold() -> f64 {
    0.2
}

fn default_one_shot() -> bool {
    true
}

/// One element's visibility registration plus its entrance.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RevealDecl {
    pub id: String,
    /// Fraction of the element that must be visible before the entrance
    /// fires. Clamped to [0, 1] at registration, never rejected.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Root-margin offsets applied to the viewport rect for this element's
    /// intersection test.
    #[serde(default)]
    pub root_margin: EdgeInsets,
    /// One-shot registrations fire at most once and are then released.
    /// Non-one-shot registrations toggle active state reversibly.
    #[serde(default = "default_one_shot")]
    pub one_shot: bool,
    /// Keep observing after firing until the runner reports the entrance
    /// complete. Used for fill meters that unobserve once full.
    #[serde(default)]
    pub release_on_complete: bool,
    pub entrance: EntranceSpec,
}

impl RevealDecl {
    pub fn new(id: impl Into<String>, entrance: EntranceSpec) -> Self {
        Self {
            id: id.into(),
            threshold: default_threshold(),
            root_margin: EdgeInsets::default(),
            one_shot: true,
            release_on_complete: false,
            entrance,
        }
    }
}

/// A declared list of reveals sharing stagger indexing.
///
/// An element's stagger index is its position in `members`, fixed when the
/// group is registered.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Group {
    pub name: String,
    pub members: Vec<RevealDecl>,
}

/// Continuous scroll mapping: properties are re-derived from scroll
/// progress through `region` on every sample. Parallax, timeline draws.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollBinding {
    pub id: String,
    pub region: ScrollRegion,
    #[serde(default)]
    pub from: StyleProps,
    #[serde(default)]
    pub to: StyleProps,
    #[serde(default)]
    pub ease: Ease,
}

impl ScrollBinding {
    /// Properties at scroll offset `current`.
    pub fn props_at(&self, current: f64) -> StyleProps {
        use crate::props::Lerp;
        let t = self.ease.apply(self.region.progress(current));
        StyleProps::lerp(&self.from, &self.to, t)
    }
}

/// Reversible boolean keyed to raw scroll offset. Active whenever the
/// vertical offset exceeds `activate_above_px`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollToggle {
    pub id: String,
    pub activate_above_px: f64,
}

/// The full declarative input: what to watch, what to bind, what to
/// toggle. The host declares, the engine consumes; nothing in here is
/// discovered at runtime.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub bindings: Vec<ScrollBinding>,
    #[serde(default)]
    pub toggles: Vec<ScrollToggle>,
}

impl Scene {
    /// Structural validation: ids non-empty and globally unique across
    /// groups, bindings, and toggles; every entrance valid. Thresholds,
    /// margins, and regions are not checked here, misconfigured numbers
    /// are clamped at registration instead.
    pub fn validate(&self) -> SightlineResult<()> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();

        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(SightlineError::validation("group name must be non-empty"));
            }
            for decl in &group.members {
                Self::claim_id(&mut seen, &decl.id, "reveal")?;
                decl.entrance.validate()?;
            }
        }
        for binding in &self.bindings {
            Self::claim_id(&mut seen, &binding.id, "binding")?;
        }
        for toggle in &self.toggles {
            Self::claim_id(&mut seen, &toggle.id, "toggle")?;
        }
        Ok(())
    }

    fn claim_id<'a>(
        seen: &mut BTreeSet<&'a str>,
        id: &'a str,
        kind: &str,
    ) -> SightlineResult<()> {
        if id.trim().is_empty() {
            return Err(SightlineError::validation(format!(
                "{kind} id must be non-empty"
            )));
        }
        if !seen.insert(id) {
            return Err(SightlineError::validation(format!("duplicate id '{id}'")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Millis;

    fn basic_scene() -> Scene {
        Scene {
            viewport: Viewport {
                width: 1280.0,
                height: 800.0,
            },
            groups: vec![Group {
                name: "cards".to_string(),
                members: vec![
                    RevealDecl::new("card-0", EntranceSpec::fade_up(24.0)),
                    RevealDecl::new("card-1", EntranceSpec::fade_up(24.0)),
                ],
            }],
            bindings: vec![ScrollBinding {
                id: "hero".to_string(),
                region: ScrollRegion::new(0.0, 600.0),
                from: StyleProps::identity(),
                to: StyleProps::identity().with_translate(0.0, 180.0),
                ease: Ease::Linear,
            }],
            toggles: vec![ScrollToggle {
                id: "navbar".to_string(),
                activate_above_px: 50.0,
            }],
        }
    }

    #[test]
    fn json_roundtrip() {
        let scene = basic_scene();
        let s = serde_json::to_string_pretty(&scene).unwrap();
        let de: Scene = serde_json::from_str(&s).unwrap();
        assert_eq!(de.groups.len(), 1);
        assert_eq!(de.groups[0].members.len(), 2);
        assert_eq!(de.toggles[0].activate_above_px, 50.0);
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut scene = basic_scene();
        scene.toggles.push(ScrollToggle {
            id: "hero".to_string(),
            activate_above_px: 10.0,
        });
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_id() {
        let mut scene = basic_scene();
        scene.groups[0].members[0].id = "  ".to_string();
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_duration_entrance() {
        let mut scene = basic_scene();
        scene.groups[0].members[1].entrance.duration = Millis::ZERO;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_accepts_basic_scene() {
        assert!(basic_scene().validate().is_ok());
    }

    #[test]
    fn binding_props_track_region_progress() {
        let scene = basic_scene();
        let b = &scene.bindings[0];
        assert_eq!(b.props_at(0.0).translate.y, 0.0);
        assert_eq!(b.props_at(300.0).translate.y, 90.0);
        assert_eq!(b.props_at(600.0).translate.y, 180.0);
        assert_eq!(b.props_at(9999.0).translate.y, 180.0);
    }

    #[test]
    fn decl_defaults_from_json() {
        let decl: RevealDecl = serde_json::from_str(
            r#"{"id": "x", "entrance": {"from": {"opacity": 0.0}, "to": {}, "duration": 400}}"#,
        )
        .unwrap();
        assert_eq!(decl.threshold, 0.2);
        assert!(decl.one_shot);
        assert!(!decl.release_on_complete);
    }
}
