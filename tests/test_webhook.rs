use mockito::Matcher;
use safehealth::webhook::DEFAULT_WEBHOOK_TIMEOUT;
use safehealth::{NotifyOutcome, WebhookNotifier};
use serde_json::json;
use std::collections::BTreeSet;
use std::time::Duration;

fn hazards(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_status_200_is_success() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "file_name": "canal.jpg",
            "hazard_count": 2,
            "detected_classes": ["Stagnant water", "Trash"],
            "detection_summary_table": "| table |",
        })))
        .with_status(200)
        .create_async()
        .await;

    let notifier = WebhookNotifier::new(Some(format!("{}/hook", server.url())), DEFAULT_WEBHOOK_TIMEOUT)?;
    let outcome = notifier
        .notify("| table |", "canal.jpg", &hazards(&["Trash", "Stagnant water"]))
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome, NotifyOutcome::Delivered { status: 200 });
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_status_201_is_success() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(201)
        .create_async()
        .await;

    let notifier = WebhookNotifier::new(Some(server.url()), DEFAULT_WEBHOOK_TIMEOUT)?;
    let outcome = notifier.notify("", "a.png", &hazards(&["Trash"])).await;

    assert_eq!(outcome.status_code(), Some(201));
    assert!(outcome.is_success());
    Ok(())
}

#[tokio::test]
async fn test_status_404_is_failure_with_code_and_body() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .with_status(404)
        .with_body("no such hook")
        .create_async()
        .await;

    let notifier = WebhookNotifier::new(Some(format!("{}/hook", server.url())), DEFAULT_WEBHOOK_TIMEOUT)?;
    let outcome = notifier.notify("", "a.png", &hazards(&["Trash"])).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.status_code(), Some(404));
    assert_eq!(
        outcome,
        NotifyOutcome::Rejected {
            status: 404,
            body: "no such hook".to_string()
        }
    );
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_other_2xx_codes_are_not_success() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server.mock("POST", "/").with_status(204).create_async().await;

    let notifier = WebhookNotifier::new(Some(server.url()), DEFAULT_WEBHOOK_TIMEOUT)?;
    let outcome = notifier.notify("", "a.png", &hazards(&["Trash"])).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.status_code(), Some(204));
    Ok(())
}

#[tokio::test]
async fn test_unset_url_is_disabled_without_request() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let notifier = WebhookNotifier::new(None, DEFAULT_WEBHOOK_TIMEOUT)?;
    assert!(!notifier.is_enabled());

    let outcome = notifier.notify("", "a.png", &hazards(&["Trash"])).await;
    assert_eq!(outcome, NotifyOutcome::Disabled);
    assert!(!outcome.is_success());
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_failure() -> anyhow::Result<()> {
    let notifier = WebhookNotifier::new(
        Some("http://127.0.0.1:1/hook".to_string()),
        Duration::from_secs(2),
    )?;
    let outcome = notifier.notify("", "a.png", &hazards(&["Trash"])).await;

    assert!(matches!(outcome, NotifyOutcome::Failed { .. }));
    assert_eq!(outcome.status_code(), None);
    Ok(())
}
