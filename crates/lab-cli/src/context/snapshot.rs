use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use lab_core::snapshot::Snapshot;

/// Read and validate a workspace snapshot JSON file.
pub fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = Snapshot::from_json(&text)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        ideas = snapshot.ideas.len(),
        tasks = snapshot.tasks.len(),
        logs = snapshot.logs.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Titles of the logs already recorded for `idea_id`.
pub fn existing_log_titles(snapshot: &Snapshot, idea_id: &str) -> HashSet<String> {
    snapshot
        .logs_for_idea(idea_id)
        .map(|log| log.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{existing_log_titles, load_snapshot};

    const SNAPSHOT: &str = r#"{
        "logs": [
            {"id": "log-1", "workspace_id": "ws", "idea_id": "idea-1", "source": "daily_report",
             "title": "Daily_Report_2026-03-01.md", "body_md": "", "created_at": "2026-03-01T00:00:00Z"},
            {"id": "log-2", "workspace_id": "ws", "idea_id": "idea-2", "source": "manual",
             "title": "kickoff", "body_md": "", "created_at": "2026-03-02T00:00:00Z"}
        ]
    }"#;

    #[test]
    fn loads_and_collects_titles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ws.json");
        fs::write(&path, SNAPSHOT).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        let titles = existing_log_titles(&snapshot, "idea-1");
        assert_eq!(titles.len(), 1);
        assert!(titles.contains("Daily_Report_2026-03-01.md"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let error = load_snapshot(&path).unwrap_err();
        assert!(format!("{error:#}").contains("absent.json"));
    }

    #[test]
    fn invalid_month_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"deliverables": [{"id": "d", "workspace_id": "w", "idea_id": "i",
                "title": "t", "type": "paper", "due_month": "2026-3", "status": "planned"}]}"#,
        )
        .unwrap();
        let error = load_snapshot(&path).unwrap_err();
        assert!(format!("{error:#}").contains("failed to load snapshot"));
    }
}
