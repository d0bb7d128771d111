//! Session behaviour configuration

use serde::Deserialize;

/// Wizard behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Keep the task id when the respondent restarts
    #[serde(default = "default_preserve_task")]
    pub preserve_task_on_restart: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preserve_task_on_restart: default_preserve_task(),
        }
    }
}

fn default_preserve_task() -> bool {
    true
}
