use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::detection::{DEFAULT_CLASS_LABELS, MAX_INPUT_SIZE, YoloParams};
use crate::error::{HazardError, HazardResult, check_threshold};
use crate::webhook::DEFAULT_WEBHOOK_TIMEOUT;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.45;

/// Process-wide settings, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_path: Option<PathBuf>,
    pub webhook_url: Option<String>,
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub input_size: u32,
    pub class_labels: Vec<String>,
    pub webhook_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            webhook_url: None,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            iou_threshold: YoloParams::default().iou_threshold,
            input_size: YoloParams::default().input_size,
            class_labels: DEFAULT_CLASS_LABELS.iter().map(|s| s.to_string()).collect(),
            webhook_timeout: DEFAULT_WEBHOOK_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> HazardResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, tests)
    pub fn from_lookup<F>(lookup: F) -> HazardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_path = get("SAFEHEALTH_MODEL_PATH").map(PathBuf::from);
        let webhook_url = get("ALERT_WEBHOOK_URL");

        let confidence_threshold = match get("CONFIDENCE_THRESHOLD") {
            Some(v) => parse_value("CONFIDENCE_THRESHOLD", &v)?,
            None => defaults.confidence_threshold,
        };
        let iou_threshold = match get("IOU_THRESHOLD") {
            Some(v) => parse_value("IOU_THRESHOLD", &v)?,
            None => defaults.iou_threshold,
        };
        let input_size = match get("MODEL_INPUT_SIZE") {
            Some(v) => parse_value("MODEL_INPUT_SIZE", &v)?,
            None => defaults.input_size,
        };
        let class_labels = match get("CLASS_LABELS") {
            Some(v) => parse_labels(&v, ','),
            None => defaults.class_labels,
        };
        let webhook_timeout = match get("WEBHOOK_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_value("WEBHOOK_TIMEOUT_SECS", &v)?),
            None => defaults.webhook_timeout,
        };

        Ok(Self {
            model_path,
            webhook_url,
            confidence_threshold,
            iou_threshold,
            input_size,
            class_labels,
            webhook_timeout,
        })
    }

    /// Replace class labels with the contents of a file (one label per line)
    pub fn load_labels_file(&mut self, path: &Path) -> HazardResult<()> {
        let contents = std::fs::read_to_string(path)?;
        let labels = parse_labels(&contents, '\n');
        if labels.is_empty() {
            return Err(HazardError::Config(format!(
                "labels file {} contains no labels",
                path.display()
            )));
        }
        self.class_labels = labels;
        Ok(())
    }

    pub fn validate(&self) -> HazardResult<()> {
        if self.model_path.is_none() {
            return Err(HazardError::Config(
                "model path missing: pass --model or set SAFEHEALTH_MODEL_PATH".to_string(),
            ));
        }
        check_threshold(self.confidence_threshold)?;
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(HazardError::Config(format!(
                "IoU threshold must be within [0, 1], got {}",
                self.iou_threshold
            )));
        }
        if self.input_size == 0 || self.input_size > MAX_INPUT_SIZE {
            return Err(HazardError::Config(format!(
                "model input size must be within 1..={}, got {}",
                MAX_INPUT_SIZE, self.input_size
            )));
        }
        if self.webhook_timeout.is_zero() {
            return Err(HazardError::Config(
                "webhook timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn yolo_params(&self) -> YoloParams {
        YoloParams {
            input_size: self.input_size,
            iou_threshold: self.iou_threshold,
            ..YoloParams::default()
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> HazardResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| HazardError::Config(format!("invalid value for {}: {:?}", key, value)))
}

fn parse_labels(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
