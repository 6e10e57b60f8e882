pub mod aggregate;
pub mod alerts;
pub mod annotate;
pub mod config;
pub mod detection;
pub mod error;
pub mod image_loader;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod webhook;

pub use models::{BoundingBox, Detection, SummaryRow};
pub use detection::{Detector, YoloDetector, YoloParams};
pub use error::{HazardError, HazardResult};
pub use alerts::{AlertStyle, HazardKind, class_alert, keyword_alert};
pub use aggregate::{build_summary_table, render_markdown_table, unique_hazard_classes};
pub use pipeline::{AnalysisReport, HazardPipeline};
pub use webhook::{AlertPayload, NotifyOutcome, WebhookNotifier};
