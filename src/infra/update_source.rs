//! Recorded update streams: one JSON-encoded update per line.

use std::{fs, path::Path};

use crate::{domain::update::Update, infra::error::AppError};

const UPDATE_SOURCE_LINE_SKIPPED: &str = "UPDATE_SOURCE_LINE_SKIPPED";

pub fn read_updates(path: &Path) -> Result<Vec<Update>, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::UpdatesRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_updates(&raw))
}

/// Blank lines and lines starting with `#` are ignored; malformed lines are logged and
/// skipped.
pub fn parse_updates(raw: &str) -> Vec<Update> {
    raw.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }

            match serde_json::from_str(line) {
                Ok(update) => Some(update),
                Err(error) => {
                    tracing::warn!(
                        code = UPDATE_SOURCE_LINE_SKIPPED,
                        line = index + 1,
                        error = %error,
                        "skipping malformed update line"
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_in_order_and_skips_noise() {
        let raw = r#"
# recorded session
{"@type": "updateChatJoin", "id": 1}
not json
{"@type": "updateSomethingNew"}
{"@type": "updateChatLeave", "id": 1}
"#;

        let updates = parse_updates(raw);

        assert_eq!(
            updates,
            vec![
                Update::UpdateChatJoin { id: 1 },
                Update::Unsupported,
                Update::UpdateChatLeave { id: 1 },
            ]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");

        let error = read_updates(&dir.path().join("absent.jsonl")).expect_err("read should fail");

        assert!(matches!(error, AppError::UpdatesRead { .. }));
    }

    #[test]
    fn reads_updates_from_file() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("updates.jsonl");
        fs::write(&path, "{\"@type\": \"updateTopics\", \"chatId\": -5}\n")
            .expect("must write updates");

        let updates = read_updates(&path).expect("updates should load");

        assert_eq!(updates, vec![Update::UpdateTopics { chat_id: -5 }]);
    }
}
