use anyhow::Result;
use cedricia_client::adapters::http::AVAILABLE_SLOTS_PATH;
use cedricia_client::core::SlotSource;
use cedricia_client::{ClientConfig, SlotsClient, SlotsError};
use httpmock::prelude::*;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Collects formatted log output so tests can count entries.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn error_lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::ERROR)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

#[tokio::test]
async fn test_slots_returned_from_backend() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(AVAILABLE_SLOTS_PATH)
            .query_param("date", "2024-01-15");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"available_slots": ["09:00", "10:00"]}));
    });

    let (logs, _guard) = capture_logs();
    let client = SlotsClient::new(&server.base_url())?;
    let slots = client.check_available_slots(&"2024-01-15").await;

    api_mock.assert();
    let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["09:00", "10:00"]);
    assert!(logs.error_lines().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_gives_empty_list_and_one_log_entry() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(AVAILABLE_SLOTS_PATH);
        then.status(200).body("{\"available_slots\": [");
    });

    let (logs, _guard) = capture_logs();
    let client = SlotsClient::new(&server.base_url())?;
    let slots = client.check_available_slots(&"2024-01-15").await;

    api_mock.assert_hits(1);
    assert!(slots.is_empty());
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1, "logged: {:?}", errors);
    assert!(errors[0].contains("2024-01-15"));
    Ok(())
}

#[tokio::test]
async fn test_server_failure_gives_empty_list_and_one_log_entry() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(AVAILABLE_SLOTS_PATH);
        then.status(500);
    });

    let (logs, _guard) = capture_logs();
    let client = SlotsClient::new(&server.base_url())?;
    let slots = client.check_available_slots(&"2024-01-15").await;

    // No retry.
    api_mock.assert_hits(1);
    assert!(slots.is_empty());
    assert_eq!(logs.error_lines().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_gives_empty_list_and_one_log_entry() -> Result<()> {
    let (logs, _guard) = capture_logs();
    let client = SlotsClient::new("http://127.0.0.1:9")?;
    let slots = client.check_available_slots(&"2024-01-15").await;

    assert!(slots.is_empty());
    assert_eq!(logs.error_lines().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_date_is_reported_by_typed_fetch() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(AVAILABLE_SLOTS_PATH);
        then.status(400)
            .json_body(serde_json::json!({"error": "Date requise"}));
    });

    let client = SlotsClient::new(&server.base_url())?;
    let err = client.fetch(&"").await.unwrap_err();
    assert!(matches!(err, SlotsError::Status { .. }));
    assert!(err.to_string().contains("Date requise"));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_lookups_are_independent() -> Result<()> {
    let server = MockServer::start();
    let monday = server.mock(|when, then| {
        when.method(GET)
            .path(AVAILABLE_SLOTS_PATH)
            .query_param("date", "2024-01-15");
        then.status(200)
            .json_body(serde_json::json!({"available_slots": ["09:00"]}));
    });
    let tuesday = server.mock(|when, then| {
        when.method(GET)
            .path(AVAILABLE_SLOTS_PATH)
            .query_param("date", "2024-01-16");
        then.status(200)
            .json_body(serde_json::json!({"available_slots": ["14:00", "15:00"]}));
    });

    let client = SlotsClient::new(&server.base_url())?;
    let (first, second) = tokio::join!(
        client.check_available_slots(&"2024-01-15"),
        client.check_available_slots(&"2024-01-16"),
    );

    monday.assert();
    tuesday.assert();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_client_built_from_toml_config() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(AVAILABLE_SLOTS_PATH);
        then.status(200)
            .json_body(serde_json::json!({"available_slots": ["16:00"]}));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("client.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "base_url = \"{}\"\nrequest_timeout_seconds = 5\n",
            server.base_url()
        ),
    )
    .await?;

    let config = ClientConfig::from_file(&config_path)?;
    let client = SlotsClient::from_config(&config)?;
    let slots = client.check_available_slots(&"2024-02-01").await;

    api_mock.assert();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].to_string(), "16:00");
    Ok(())
}

#[tokio::test]
async fn test_mixed_slot_formats_are_not_masked() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(AVAILABLE_SLOTS_PATH);
        then.status(200)
            .json_body(serde_json::json!({"available_slots": ["09:00", "10:00:00"]}));
    });

    let (logs, _guard) = capture_logs();
    let client = SlotsClient::new(&server.base_url())?;
    let slots = client.check_available_slots(&"2024-01-15").await;

    let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["09:00", "10:00:00"]);
    assert!(logs.error_lines().is_empty());
    Ok(())
}
