use serde::{Deserialize, Serialize};

fn default_overview_anim_ms() -> u64 {
    300
}

fn default_fake_task_fade_ms() -> u64 {
    300
}

fn default_feedback_visible_ms() -> u64 {
    3000
}

/// Tunables for the tutorial screen, stored as a JSON file next to the host's
/// other configuration. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialSettings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Duration of the overview-complete progress animation.
    #[serde(default = "default_overview_anim_ms")]
    pub overview_anim_ms: u64,
    /// Duration hint for the fake task view fly-home and fade animations.
    #[serde(default = "default_fake_task_fade_ms")]
    pub fake_task_fade_ms: u64,
    /// How long a feedback message stays visible before the hide action fires.
    #[serde(default = "default_feedback_visible_ms")]
    pub feedback_visible_ms: u64,
}

impl Default for TutorialSettings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            overview_anim_ms: default_overview_anim_ms(),
            fake_task_fade_ms: default_fake_task_fade_ms(),
            feedback_visible_ms: default_feedback_visible_ms(),
        }
    }
}

impl TutorialSettings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
