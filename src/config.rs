use std::time::Duration;

/// A single classification rule: a label to match (case-insensitive,
/// trimmed) and the minimum weight required for it to count.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRule {
    pub label: String,
    pub min_weight: f32,
}

impl ClassificationRule {
    pub fn new(label: impl Into<String>, min_weight: f32) -> Self {
        Self {
            label: label.into(),
            min_weight,
        }
    }

    fn matches(&self, label: &str, weight: f32) -> bool {
        self.label.trim().eq_ignore_ascii_case(label.trim()) && weight >= self.min_weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick_rate: Duration,
    pub minimal_rate_camera_process: Duration,
    pub minimal_duration_will_open: Duration,
    pub minimal_duration_will_close: Duration,
    pub classification_open_list: Vec<ClassificationRule>,
    pub classification_close_list: Vec<ClassificationRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(500),
            minimal_rate_camera_process: Duration::from_millis(200),
            minimal_duration_will_open: Duration::from_secs(3),
            minimal_duration_will_close: Duration::from_secs(3),
            classification_open_list: vec![ClassificationRule::new("dog", 0.5)],
            classification_close_list: vec![ClassificationRule::new("cat", 0.5)],
        }
    }
}

impl Config {
    pub fn should_open(&self, classifications: &[crate::core::Classification]) -> bool {
        classifications
            .iter()
            .any(|c| self.classification_open_list.iter().any(|r| r.matches(&c.label, c.weight)))
    }

    pub fn should_close(&self, classifications: &[crate::core::Classification]) -> bool {
        classifications
            .iter()
            .any(|c| self.classification_close_list.iter().any(|r| r.matches(&c.label, c.weight)))
    }

    /// Checked once at construction: an invalid config must refuse to
    /// start rather than misbehave quietly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate.is_zero() {
            return Err(ConfigError::ZeroDuration("tick_rate"));
        }
        if self.minimal_rate_camera_process.is_zero() {
            return Err(ConfigError::ZeroDuration("minimal_rate_camera_process"));
        }
        if self.minimal_duration_will_open.is_zero() {
            return Err(ConfigError::ZeroDuration("minimal_duration_will_open"));
        }
        if self.minimal_duration_will_close.is_zero() {
            return Err(ConfigError::ZeroDuration("minimal_duration_will_close"));
        }
        for rule in self
            .classification_open_list
            .iter()
            .chain(self.classification_close_list.iter())
        {
            if rule.label.trim().is_empty() {
                return Err(ConfigError::EmptyRuleLabel);
            }
            if !(0.0..=1.0).contains(&rule.min_weight) {
                return Err(ConfigError::WeightOutOfRange(rule.label.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroDuration(&'static str),
    EmptyRuleLabel,
    WeightOutOfRange(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDuration(field) => write!(f, "config field `{field}` must be non-zero"),
            ConfigError::EmptyRuleLabel => write!(f, "classification rule label must not be empty"),
            ConfigError::WeightOutOfRange(label) => {
                write!(f, "classification rule `{label}` has min_weight outside [0,1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
