use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::{HazardError, HazardResult};

pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(15);

/// JSON body posted to the alert webhook
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertPayload {
    pub file_name: String,
    pub hazard_count: usize,
    pub detected_classes: Vec<String>,
    pub detection_summary_table: String,
    pub timestamp: String,
}

impl AlertPayload {
    pub fn new(summary_table: &str, file_name: &str, hazards: &BTreeSet<String>) -> Self {
        Self::with_timestamp(summary_table, file_name, hazards, now())
    }

    pub fn with_timestamp(
        summary_table: &str,
        file_name: &str,
        hazards: &BTreeSet<String>,
        at: OffsetDateTime,
    ) -> Self {
        Self {
            file_name: file_name.to_string(),
            hazard_count: hazards.len(),
            detected_classes: hazards.iter().cloned().collect(),
            detection_summary_table: summary_table.to_string(),
            timestamp: format_timestamp(at),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    at.format(format)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Result of one notification attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NotifyOutcome {
    /// No webhook URL configured; nothing was sent
    Disabled,
    /// Nothing worth reporting, or the caller opted out for this run
    Skipped,
    Delivered { status: u16 },
    Rejected { status: u16, body: String },
    Failed { reason: String },
}

impl NotifyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NotifyOutcome::Delivered { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            NotifyOutcome::Delivered { status } | NotifyOutcome::Rejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Best-effort, at-most-once alert delivery over HTTP POST.
/// No retries; a slow receiver blocks the caller up to the timeout.
#[derive(Clone)]
pub struct WebhookNotifier {
    url: Option<String>,
    client: Client,
}

impl WebhookNotifier {
    pub fn new(url: Option<String>, timeout: Duration) -> HazardResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HazardError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let url = url.filter(|u| !u.trim().is_empty());
        Ok(Self { url, client })
    }

    pub fn disabled() -> HazardResult<Self> {
        Self::new(None, DEFAULT_WEBHOOK_TIMEOUT)
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Build the payload for one analysis run and post it
    pub async fn notify(
        &self,
        summary_table: &str,
        file_name: &str,
        hazards: &BTreeSet<String>,
    ) -> NotifyOutcome {
        if self.url.is_none() {
            tracing::warn!("ALERT_WEBHOOK_URL not set; automated alert is disabled");
            return NotifyOutcome::Disabled;
        }
        let payload = AlertPayload::new(summary_table, file_name, hazards);
        self.deliver(&payload).await
    }

    /// Post a prepared payload. Only 200 and 201 count as delivered.
    pub async fn deliver(&self, payload: &AlertPayload) -> NotifyOutcome {
        let Some(url) = &self.url else {
            return NotifyOutcome::Disabled;
        };

        match self.client.post(url).json(payload).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 200 || status == 201 {
                    tracing::info!(status, hazards = payload.hazard_count, "Webhook alert delivered");
                    NotifyOutcome::Delivered { status }
                } else {
                    let body = response.text().await.unwrap_or_default();
                    tracing::warn!(status, body = %body, "Webhook rejected alert");
                    NotifyOutcome::Rejected { status, body }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error connecting to webhook URL");
                NotifyOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
