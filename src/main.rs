use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use safehealth::alerts::AlertStyle;
use safehealth::config::AppConfig;
use safehealth::logging::setup_logging;
use safehealth::{AnalysisReport, HazardPipeline, NotifyOutcome, WebhookNotifier, YoloDetector};

#[derive(Parser)]
#[command(name = "safehealth")]
#[command(about = "Detect stagnant water, trash hotspots and blocked drains in images")]
struct Cli {
    /// Path to input image file (JPEG or PNG)
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Detection model weights (.rten), overrides SAFEHEALTH_MODEL_PATH
    #[arg(short, long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Minimum confidence for a detection, 0.0 to 1.0 (higher = fewer false alarms)
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Class labels file, one label per line in class id order
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Alert webhook URL, overrides ALERT_WEBHOOK_URL
    #[arg(long, value_name = "URL")]
    webhook_url: Option<String>,

    /// Do not post the alert webhook for this run
    #[arg(long)]
    no_webhook: bool,

    /// Save the image with detection boxes drawn
    #[arg(long, value_name = "FILE")]
    annotated_out: Option<PathBuf>,

    /// Advisory text format
    #[arg(long, value_enum, default_value_t = Style::Class)]
    alert_style: Style,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    /// Per-class assessment lines
    Class,
    /// Keyword advisory lines
    Keyword,
}

impl From<Style> for AlertStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Class => AlertStyle::ClassName,
            Style::Keyword => AlertStyle::Keyword,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    setup_logging(args.verbose);

    let mut config = AppConfig::from_env()?;
    if let Some(model) = args.model.clone() {
        config.model_path = Some(model);
    }
    if let Some(threshold) = args.threshold {
        config.confidence_threshold = threshold;
    }
    if let Some(url) = args.webhook_url.clone() {
        config.webhook_url = Some(url);
    }
    if let Some(labels) = &args.labels {
        config.load_labels_file(labels)?;
    }
    config.validate()?;

    let model_path = config
        .model_path
        .clone()
        .context("model path missing")?;

    // Loaded once; the pipeline only borrows it
    let detector = YoloDetector::load(&model_path, config.class_labels.clone(), config.yolo_params())
        .context("Cannot start without detection model")?;

    let notifier = WebhookNotifier::new(config.webhook_url.clone(), config.webhook_timeout)?;
    let pipeline = HazardPipeline::new(Arc::new(detector), notifier)
        .with_alert_style(args.alert_style.into())
        .with_notifications(!args.no_webhook);

    let bytes = std::fs::read(&args.image_path)
        .with_context(|| format!("Failed to read {}", args.image_path.display()))?;
    let file_name = args
        .image_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| args.image_path.display().to_string());

    let report = pipeline
        .analyze_bytes(&bytes, &file_name, config.confidence_threshold)
        .await?;

    if let Some(out) = &args.annotated_out {
        report
            .annotated
            .save(out)
            .map_err(|e| anyhow::anyhow!("Failed to save annotated image: {}", e))?;
        tracing::info!(path = %out.display(), "Annotated image saved");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.annotated_out.as_ref());
    }

    Ok(())
}

fn print_report(report: &AnalysisReport, annotated: Option<&PathBuf>) {
    println!("=== Hazard Analysis: {} ===", report.file_name);
    println!(
        "Image: {}x{}, minimum confidence {}",
        report.width, report.height, report.confidence_threshold
    );
    if let Some(path) = annotated {
        println!("Detections highlighted in: {}", path.display());
    }

    if !report.has_hazards() {
        println!("\n✅ No identified hazards detected at the selected confidence threshold.");
        return;
    }

    println!("\n⚠️ CRITICAL HAZARD ALERT: Immediate Action Required");
    println!("\n--- Assessment & Recommendations ---");
    println!("{}", report.alert);

    println!("\n--- Detections ({}) ---", report.detections.len());
    println!("{}", report.summary_table);

    println!();
    match &report.notification {
        NotifyOutcome::Delivered { .. } => println!(
            "✅ Alert Sent! Notification successfully dispatched to the response team via Webhook."
        ),
        NotifyOutcome::Rejected { status, body } => {
            println!("Webhook failed! Status code: {}. Response: {}", status, body)
        }
        NotifyOutcome::Failed { reason } => println!(
            "Error connecting to webhook URL. Check URL or internet connection. Error: {}",
            reason
        ),
        NotifyOutcome::Disabled => {
            println!("ALERT_WEBHOOK_URL missing from environment. Automated alert is disabled.")
        }
        NotifyOutcome::Skipped => println!("Webhook alert skipped for this run."),
    }
}
