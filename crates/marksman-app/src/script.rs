//! Scripted input for unattended runs.
//!
//! A script is a JSON list of `{ "frame": n, "input": { ... } }` steps.
//! Inputs are levels: a step's sample stays in effect until the next step,
//! so a shot needs a step that presses `fire` and a later one that
//! releases it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use marksman_core::input::InputSample;

use crate::error::ConfigError;

/// Input that takes effect at `frame`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frame: u64,
    #[serde(default)]
    pub input: InputSample,
}

/// Steps ordered by frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        // Stable, so same-frame steps keep file order and the last one wins.
        steps.sort_by_key(|s| s.frame);
        Self { steps }
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let steps: Vec<ScriptStep> = serde_json::from_str(json)?;
        Ok(Self::new(steps))
    }

    /// The sample that starts at exactly `frame`, if any.
    pub fn step_at(&self, frame: u64) -> Option<InputSample> {
        let start = self.steps.partition_point(|s| s.frame < frame);
        self.steps[start..]
            .iter()
            .take_while(|s| s.frame == frame)
            .last()
            .map(|s| s.input)
    }

    /// True if some step asks to quit.
    pub fn quits(&self) -> bool {
        self.steps.iter().any(|s| s.input.quit)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

pub fn load_script(path: &Path) -> Result<InputScript, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    InputScript::parse(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let script = InputScript::parse(
            r#"[
                {"frame": 30, "input": {"fire": false}},
                {"frame": 10, "input": {"fire": true}},
                {"frame": 90, "input": {"quit": true}}
            ]"#,
        )
        .unwrap();

        assert_eq!(script.len(), 3);
        assert!(script.step_at(0).is_none());
        assert!(script.step_at(10).unwrap().fire);
        assert!(script.step_at(11).is_none());
        assert!(!script.step_at(30).unwrap().fire);
        assert!(script.quits());
    }

    #[test]
    fn test_same_frame_last_wins() {
        let script = InputScript::new(vec![
            ScriptStep {
                frame: 5,
                input: InputSample::default().firing(),
            },
            ScriptStep {
                frame: 5,
                input: InputSample::default().reloading(),
            },
        ]);
        let input = script.step_at(5).unwrap();
        assert!(input.reload);
        assert!(!input.fire);
    }

    #[test]
    fn test_missing_input_is_idle() {
        let script = InputScript::parse(r#"[{"frame": 2}]"#).unwrap();
        assert_eq!(script.step_at(2), Some(InputSample::default()));
        assert!(!script.quits());
    }

    #[test]
    fn test_load_script_missing_file() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
