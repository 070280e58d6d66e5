use crate::{core::Millis, props::StyleProps, spec::EntranceSpec};

/// Whatever actually animates pixels.
///
/// The engine hands actions to a runner and never waits; playback,
/// timers, and frame scheduling are entirely the runner's problem. A
/// runner that wants to report entrance completion calls back into
/// [`crate::session::Session::complete`].
pub trait AnimationRunner {
    fn start_entrance(&mut self, id: &str, spec: &EntranceSpec, delay: Millis);
    fn set_active(&mut self, id: &str, active: bool);
    fn apply(&mut self, id: &str, props: &StyleProps);
}

/// Discards everything. Useful when only engine state matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRunner;

impl AnimationRunner for NullRunner {
    fn start_entrance(&mut self, _id: &str, _spec: &EntranceSpec, _delay: Millis) {}
    fn set_active(&mut self, _id: &str, _active: bool) {}
    fn apply(&mut self, _id: &str, _props: &StyleProps) {}
}

/// One recorded runner call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RunnerRecord {
    Entrance {
        id: String,
        spec: EntranceSpec,
        delay: Millis,
    },
    Active {
        id: String,
        active: bool,
    },
    Apply {
        id: String,
        props: StyleProps,
    },
}

/// Append-only log of every call, in order. The test and simulation
/// runner: two identical drives must produce two identical logs.
#[derive(Clone, Debug, Default)]
pub struct RecordingRunner {
    records: Vec<RunnerRecord>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RunnerRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RunnerRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AnimationRunner for RecordingRunner {
    fn start_entrance(&mut self, id: &str, spec: &EntranceSpec, delay: Millis) {
        self.records.push(RunnerRecord::Entrance {
            id: id.to_string(),
            spec: *spec,
            delay,
        });
    }

    fn set_active(&mut self, id: &str, active: bool) {
        self.records.push(RunnerRecord::Active {
            id: id.to_string(),
            active,
        });
    }

    fn apply(&mut self, id: &str, props: &StyleProps) {
        self.records.push(RunnerRecord::Apply {
            id: id.to_string(),
            props: *props,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_preserves_call_order() {
        let mut runner = RecordingRunner::new();
        runner.set_active("nav", true);
        runner.start_entrance("hero", &EntranceSpec::fade_up(24.0), Millis(100));
        runner.apply("bg", &StyleProps::identity());

        assert_eq!(runner.len(), 3);
        assert!(matches!(runner.records()[0], RunnerRecord::Active { .. }));
        assert!(matches!(runner.records()[1], RunnerRecord::Entrance { .. }));
        assert!(matches!(runner.records()[2], RunnerRecord::Apply { .. }));
    }

    #[test]
    fn records_serialize_for_traces() {
        let mut runner = RecordingRunner::new();
        runner.set_active("nav", true);
        let json = serde_json::to_string(runner.records()).unwrap();
        let back: Vec<RunnerRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, runner.into_records());
    }
}
