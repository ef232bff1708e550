use std::io::ErrorKind;
use std::path::Path;

/// Reads the pin list: a JSON array of repository names. A missing,
/// unreadable, or malformed file degrades to an empty list; pins are
/// an optional nicety and never block the portfolio.
pub async fn load_pins(path: &Path) -> Vec<String> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "pins file unreadable");
            }
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(pins) => pins,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "pins file is not a JSON array of names");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_names_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pins.json");
        std::fs::write(&path, r#"["folio", "Weather", "tiny-tool"]"#).unwrap();

        let pins = load_pins(&path).await;
        assert_eq!(pins, vec!["folio", "Weather", "tiny-tool"]);
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let pins = load_pins(&dir.path().join("nope.json")).await;
        assert!(pins.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pins.json");
        std::fs::write(&path, r#"{"pinned": true}"#).unwrap();

        let pins = load_pins(&path).await;
        assert!(pins.is_empty());
    }

    #[tokio::test]
    async fn empty_array_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pins.json");
        std::fs::write(&path, "[]").unwrap();

        let pins = load_pins(&path).await;
        assert!(pins.is_empty());
    }
}
