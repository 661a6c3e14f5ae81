use crate::api::ShelfApi;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub api: ShelfApi<FileStore>,
    pub catalog: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let catalog = temp_dir.path().join("media.json");
        let api = ShelfApi::new(FileStore::new_fs(catalog.clone()));
        Self {
            _temp_dir: temp_dir,
            api,
            catalog,
        }
    }

    pub fn raw_catalog(&self) -> String {
        std::fs::read_to_string(&self.catalog).expect("catalog file missing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookInput;

    #[test]
    fn test_env_persists_to_temp_file() {
        let env = TestEnv::new();
        env.api
            .add_book(BookInput::new("Test Book", "Me").with_date(2025))
            .unwrap();
        let raw = env.raw_catalog();
        assert!(raw.contains("\"name\": \"Test Book\""));
        assert!(raw.contains("\"date\": 2025"));
    }

    #[test]
    fn test_unknown_fields_dropped_on_rewrite() {
        let env = TestEnv::new();
        std::fs::write(
            &env.catalog,
            r#"[{"id": 1, "name": "A", "author": "B", "date": 1, "category": "Novel", "isbn": "123"}]"#,
        )
        .unwrap();
        env.api.add_book(BookInput::new("C", "D")).unwrap();
        assert!(!env.raw_catalog().contains("isbn"));
    }
}
