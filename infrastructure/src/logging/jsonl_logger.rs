//! JSONL transcript writer
//!
//! One JSON object per line: the event payload plus `type`, `seq` and an
//! RFC 3339 `timestamp`. The file is opened in append mode so several runs
//! can share one log.

use council_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

pub struct JsonlConversationLogger {
    inner: Mutex<Inner>,
    path: PathBuf,
}

struct Inner {
    writer: BufWriter<File>,
    seq: u64,
}

impl Inner {
    fn write_line(&mut self, record: &Value) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating parent directories as needed
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Conversation log: {}", path.display());

        Ok(Self {
            inner: Mutex::new(Inner {
                writer: BufWriter::new(file),
                seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent, seq: u64) -> Value {
        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("seq".to_string(), Value::from(seq));
        map.insert(
            "timestamp".to_string(),
            Value::from(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        );
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        inner.seq += 1;
        let record = Self::record(event, inner.seq);

        // Flushed per line so a killed session still leaves a readable log
        let result = inner.write_line(&record);
        if let Err(e) = result {
            warn!("Failed to write conversation log {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("council.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "session_started",
            serde_json::json!({"mode": "debate", "topic": "Is Rust fast?"}),
        ));
        logger.log(ConversationEvent::new(
            "turn",
            serde_json::json!({"member": "thinker", "phase": "initial", "text": "Yes."}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "session_started");
        assert_eq!(lines[0]["mode"], "debate");
        assert_eq!(lines[0]["seq"], 1);
        assert_eq!(lines[1]["type"], "turn");
        assert_eq!(lines[1]["text"], "Yes.");
        assert_eq!(lines[1]["seq"], 2);
        assert!(lines[1]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("council.jsonl");

        for _ in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new(
                "session_completed",
                serde_json::json!({"turns": 3}),
            ));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("council.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new("note", serde_json::json!("plain")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "plain");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlConversationLogger::open(blocker.join("council.jsonl")).is_err());
    }
}
