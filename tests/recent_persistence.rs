//! Round-trip and tolerance tests for the persisted recent list.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use cyclops_player::{RECENT_CAPACITY, RecentItems};
use tempfile::TempDir;

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.json")
}

#[test]
fn round_trip_survives_restart() -> Result<()> {
    let dir = TempDir::new()?;

    let mut recent = RecentItems::load(config_path(&dir));
    recent.record_use("/videos/a.mp4")?;
    recent.record_use("https://example.com/stream.m3u8")?;
    recent.record_use("/videos/b.mkv")?;

    // Fresh load simulates a process restart.
    let reloaded = RecentItems::load(config_path(&dir));
    assert_eq!(
        reloaded.current(),
        [
            "/videos/b.mkv",
            "https://example.com/stream.m3u8",
            "/videos/a.mp4"
        ]
    );
    Ok(())
}

#[test]
fn persisted_document_uses_the_recent_items_key() -> Result<()> {
    let dir = TempDir::new()?;

    let mut recent = RecentItems::load(config_path(&dir));
    recent.record_use("/videos/a.mp4")?;

    let raw = fs::read_to_string(config_path(&dir))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(doc["recent_items"][0], "/videos/a.mp4");
    Ok(())
}

#[test]
fn invalid_json_loads_as_empty() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(config_path(&dir), "{not json at all")?;

    let recent = RecentItems::load(config_path(&dir));
    assert!(recent.is_empty());
    Ok(())
}

#[test]
fn missing_key_loads_as_empty() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(config_path(&dir), r#"{"volume": 0.8}"#)?;

    let recent = RecentItems::load(config_path(&dir));
    assert!(recent.is_empty());
    Ok(())
}

#[test]
fn wrong_value_type_loads_as_empty() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(config_path(&dir), r#"{"recent_items": "a.mp4"}"#)?;

    let recent = RecentItems::load(config_path(&dir));
    assert!(recent.is_empty());
    Ok(())
}

#[test]
fn unknown_keys_are_tolerated() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        config_path(&dir),
        r#"{"recent_items": ["a.mp4"], "theme": "dark"}"#,
    )?;

    let recent = RecentItems::load(config_path(&dir));
    assert_eq!(recent.current(), ["a.mp4"]);
    Ok(())
}

#[test]
fn hand_edited_duplicates_and_overflow_are_sanitized() -> Result<()> {
    let dir = TempDir::new()?;
    let mut items: Vec<String> = (0..14).map(|i| format!("clip{i}.mp4")).collect();
    items.push("clip0.mp4".into());
    items.push("   ".into());
    fs::write(
        config_path(&dir),
        serde_json::to_string(&serde_json::json!({ "recent_items": items }))?,
    )?;

    let recent = RecentItems::load(config_path(&dir));
    assert_eq!(recent.len(), RECENT_CAPACITY);
    assert_eq!(recent.current()[0], "clip0.mp4");
    assert_eq!(
        recent
            .current()
            .iter()
            .filter(|r| r.as_str() == "clip0.mp4")
            .count(),
        1
    );
    Ok(())
}

#[test]
fn eviction_is_durable_across_restart() -> Result<()> {
    let dir = TempDir::new()?;

    let mut recent = RecentItems::load(config_path(&dir));
    for i in 0..=RECENT_CAPACITY {
        recent.record_use(&format!("clip{i}.mp4"))?;
    }

    let reloaded = RecentItems::load(config_path(&dir));
    assert_eq!(reloaded.len(), RECENT_CAPACITY);
    assert!(!reloaded.current().iter().any(|r| r == "clip0.mp4"));
    assert_eq!(reloaded.current()[0], format!("clip{RECENT_CAPACITY}.mp4"));
    Ok(())
}

#[test]
fn blank_input_never_creates_the_file() -> Result<()> {
    let dir = TempDir::new()?;

    let mut recent = RecentItems::load(config_path(&dir));
    recent.record_use("")?;
    recent.record_use("   ")?;

    assert!(recent.is_empty());
    assert!(!config_path(&dir).exists());
    Ok(())
}
