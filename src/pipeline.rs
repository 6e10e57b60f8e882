use anyhow::Result;
use image::RgbImage;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::aggregate::{build_summary_table, render_markdown_table, unique_hazard_classes};
use crate::alerts::{AlertStyle, compose_alert};
use crate::annotate::{DEFAULT_BORDER_WIDTH, draw_detections};
use crate::detection::Detector;
use crate::error::check_threshold;
use crate::image_loader::load_image_from_bytes;
use crate::models::{Detection, SummaryRow};
use crate::webhook::{NotifyOutcome, WebhookNotifier};

/// Everything produced by one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub confidence_threshold: f32,
    pub detections: Vec<Detection>,
    pub summary: Vec<SummaryRow>,
    pub summary_table: String,
    pub hazards: BTreeSet<String>,
    pub alert: String,
    pub notification: NotifyOutcome,
    /// Input image with detection boxes drawn
    #[serde(skip)]
    pub annotated: RgbImage,
}

impl AnalysisReport {
    pub fn has_hazards(&self) -> bool {
        !self.hazards.is_empty()
    }
}

/// Sequential hazard analysis: decode → detect → aggregate → compose → notify.
///
/// Holds the detector handle created once at startup; every run borrows it.
pub struct HazardPipeline {
    detector: Arc<dyn Detector>,
    notifier: WebhookNotifier,
    alert_style: AlertStyle,
    border_width: u32,
    notifications: bool,
}

impl HazardPipeline {
    pub fn new(detector: Arc<dyn Detector>, notifier: WebhookNotifier) -> Self {
        Self {
            detector,
            notifier,
            alert_style: AlertStyle::default(),
            border_width: DEFAULT_BORDER_WIDTH,
            notifications: true,
        }
    }

    pub fn with_alert_style(mut self, style: AlertStyle) -> Self {
        self.alert_style = style;
        self
    }

    pub fn with_border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    /// Skip the webhook for runs of this pipeline
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications = enabled;
        self
    }

    /// Decode uploaded bytes and analyze them
    pub async fn analyze_bytes(
        &self,
        bytes: &[u8],
        file_name: &str,
        confidence_threshold: f32,
    ) -> Result<AnalysisReport> {
        check_threshold(confidence_threshold)?;
        let image = load_image_from_bytes(bytes)?;
        self.analyze_image(&image, file_name, confidence_threshold).await
    }

    /// Analyze an already decoded image.
    ///
    /// Detection errors abort the run. Webhook problems never do: they are
    /// recorded in `AnalysisReport::notification`.
    pub async fn analyze_image(
        &self,
        image: &RgbImage,
        file_name: &str,
        confidence_threshold: f32,
    ) -> Result<AnalysisReport> {
        let confidence_threshold = check_threshold(confidence_threshold)?;

        tracing::info!(
            file = file_name,
            width = image.width(),
            height = image.height(),
            threshold = confidence_threshold,
            "Starting hazard analysis"
        );

        let detections = self.detector.detect(image, confidence_threshold)?;

        let annotated = draw_detections(image, &detections, self.border_width);
        let summary = build_summary_table(&detections);
        let summary_table = render_markdown_table(&summary);
        let hazards = unique_hazard_classes(&detections);
        let alert = compose_alert(self.alert_style, &hazards);

        tracing::info!(
            detections = detections.len(),
            hazards = hazards.len(),
            "Hazard analysis complete"
        );

        let notification = if hazards.is_empty() || !self.notifications {
            NotifyOutcome::Skipped
        } else {
            self.notifier.notify(&summary_table, file_name, &hazards).await
        };

        Ok(AnalysisReport {
            file_name: file_name.to_string(),
            width: image.width(),
            height: image.height(),
            confidence_threshold,
            detections,
            summary,
            summary_table,
            hazards,
            alert,
            notification,
            annotated,
        })
    }
}
