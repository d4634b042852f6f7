use super::eval::{MaterialEvaluator, MobilityEvaluator, MOBILITY_WEIGHT};
use super::evaluator::Evaluator;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_PATH: &str = "agent_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    Material,
    Mobility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub heuristic: Heuristic,
    #[serde(default = "default_mobility_weight")]
    pub mobility_weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below each root action before the heuristic takes over.
    pub max_depth: usize,
    /// `false` searches the same tree exhaustively.
    pub alpha_beta: bool,
    pub time_aware: bool,
    /// Soft cutoff once the remaining budget drops below this many nanoseconds.
    pub time_safety_margin_ns: u64,
}

fn default_mobility_weight() -> f32 {
    MOBILITY_WEIGHT
}

impl AgentConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&config_str).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: AgentConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::debug!("using default agent config: {:#}", e);
            Self::default()
        })
    }
}

impl EvaluationConfig {
    pub fn build(&self) -> Box<dyn Evaluator> {
        match self.heuristic {
            Heuristic::Material => Box::new(MaterialEvaluator),
            Heuristic::Mobility => Box::new(MobilityEvaluator::new(self.mobility_weight)),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            heuristic: Heuristic::Material,
            mobility_weight: MOBILITY_WEIGHT,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        // depth 4 fits a 10x10 board with a few holes at 2ms per step
        SearchConfig {
            max_depth: 4,
            alpha_beta: true,
            time_aware: true,
            time_safety_margin_ns: 100_000_000,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig::default(),
            search: SearchConfig::default(),
        }
    }
}
