use crate::core::loader::load_records;
use std::path::Path;

/// Prints every app carrying a `teamsAppId`, numbered by its position in the
/// file (records without the field keep their slot in the numbering), plus a
/// total. Returns the ids found. Read-only: no network calls.
pub fn list_apps<P: AsRef<Path>>(path: P) -> Vec<String> {
    let records = match load_records(path) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Failed to load app list: {}", e);
            eprintln!("❌ Error: {}", e);
            return Vec::new();
        }
    };

    println!("📋 Extracted Teams App IDs:");
    println!("{}", "=".repeat(50));

    let mut app_ids = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if let Some(app_id) = &record.teams_app_id {
            println!("{:2}. {} ({})", i + 1, app_id, record.display_name());
            app_ids.push(app_id.clone());
        }
    }

    println!("\n📊 Total: {} Teams apps found", app_ids.len());

    app_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_list_apps_returns_ids_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"teamsAppId":"id1","appName":"App One"},{"teamsAppId":"id2"},{"other":"x"}]"#,
        )
        .unwrap();

        let ids = list_apps(file.path());
        assert_eq!(ids, vec!["id1", "id2"]);
    }

    #[test]
    fn test_list_apps_missing_file_returns_empty() {
        let ids = list_apps("no_such_file.json");
        assert!(ids.is_empty());
    }
}
