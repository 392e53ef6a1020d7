use super::document::HistoryDocument;
use super::draw::Draw;
use super::History;
use crate::error::AppError;
use crate::source::DocumentSource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const SLOT_FILE: &str = "lotto_history.json";

/// The single persisted slot: a JSON array of 6-number arrays.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

/// How the initial history was obtained.
#[derive(Debug)]
pub enum LoadOutcome {
    Storage,
    Seeded(DocumentSource),
    Failed(AppError),
}

impl HistoryStore {
    pub fn new(data_dir: &Path) -> Self {
        HistoryStore {
            path: data_dir.join(SLOT_FILE),
        }
    }

    /// `Ok(None)` only when nothing has been persisted yet; any other read
    /// failure is an error.
    pub fn load(&self) -> Result<Option<Vec<Draw>>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| AppError::JsonError(format!("Failed to parse saved history: {}", e)))
    }

    pub fn save(&self, history: &History) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::Storage(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_string(history.draws()).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize history: {}", e))
        })?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), draws = history.len(), "history saved");
        Ok(())
    }

    /// One-time load: persisted slot first, then the default document.
    ///
    /// Never fails outright. A failed fallback leaves the history empty and is
    /// returned as `LoadOutcome::Failed` so the caller can report it.
    pub fn load_initial(&self, source: &DocumentSource, max_len: usize) -> (History, LoadOutcome) {
        // an existing slot we could not read is left on disk untouched
        let keep_slot = match self.load() {
            Ok(Some(draws)) => {
                info!(draws = draws.len(), "history loaded from storage");
                return (History::from_draws(draws, max_len), LoadOutcome::Storage);
            }
            Ok(None) => {
                debug!("no saved history, falling back to default document");
                false
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable saved history");
                true
            }
        };

        let seeded = source
            .fetch()
            .and_then(|body| {
                HistoryDocument::from_json(&body)
                    .map_err(|e| AppError::LoadFailure(format!("{}: {}", source, e)))
            })
            .map(|doc| History::from_draws(doc.history, max_len));

        match seeded {
            Ok(history) => {
                info!(%source, draws = history.len(), "history seeded from default document");
                if keep_slot {
                    warn!(
                        path = %self.path.display(),
                        "seeded history not saved over the unreadable slot"
                    );
                } else if let Err(e) = self.save(&history) {
                    warn!(error = %e, "could not persist seeded history");
                }
                (history, LoadOutcome::Seeded(source.clone()))
            }
            Err(e) => {
                warn!(error = %e, "default document unavailable, starting empty");
                (History::new(max_len), LoadOutcome::Failed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::make_test_draws;

    fn missing_source() -> DocumentSource {
        DocumentSource::File(PathBuf::from("/nonexistent/data/lotto.json"))
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        let history = History::from_draws(make_test_draws(12), 100);

        store.save(&history).unwrap();
        assert_eq!(store.load().unwrap(), Some(history.draws().to_vec()));
    }

    #[test]
    fn test_slot_is_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        let mut history = History::new(10);
        history.add(&[1, 2, 3, 4, 5, 6]).unwrap();
        store.save(&history).unwrap();

        let content = fs::read_to_string(&store.path).unwrap();
        assert_eq!(content, "[[1,2,3,4,5,6]]");
    }

    #[test]
    fn test_load_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(HistoryStore::new(dir.path()).load().unwrap(), None);
    }

    #[test]
    fn test_unreadable_slot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        fs::write(&store.path, [0xff, 0xfe, b'[']).unwrap();

        assert!(matches!(store.load(), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_slot_path_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        fs::create_dir(&store.path).unwrap();

        assert!(matches!(store.load(), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_initial_load_prefers_storage() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        store
            .save(&History::from_draws(make_test_draws(4), 100))
            .unwrap();

        let (history, outcome) = store.load_initial(&missing_source(), 100);
        assert_eq!(history.len(), 4);
        assert!(matches!(outcome, LoadOutcome::Storage));
    }

    #[test]
    fn test_initial_load_seeds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{"history":[[1,2,3,4,5,6],[10,20,30,40,41,42]]}"#).unwrap();
        let store = HistoryStore::new(&dir.path().join("data"));

        let (history, outcome) = store.load_initial(&DocumentSource::File(seed), 100);
        assert_eq!(history.len(), 2);
        assert!(matches!(outcome, LoadOutcome::Seeded(_)));
        assert_eq!(store.load().unwrap().map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_initial_load_failure_leaves_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        let (history, outcome) = store.load_initial(&missing_source(), 100);
        assert!(history.is_empty());
        assert!(matches!(outcome, LoadOutcome::Failed(AppError::LoadFailure(_))));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_seed_without_history_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, "[[1,2,3,4,5,6]]").unwrap();
        let store = HistoryStore::new(dir.path());

        let (history, outcome) = store.load_initial(&DocumentSource::File(seed), 100);
        assert!(history.is_empty());
        assert!(matches!(outcome, LoadOutcome::Failed(AppError::LoadFailure(_))));
    }

    #[test]
    fn test_corrupt_slot_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        fs::write(&store.path, "[[1,2,3]").unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{"history":[[1,2,3,4,5,6]]}"#).unwrap();

        let (history, outcome) = store.load_initial(&DocumentSource::File(seed), 100);
        assert_eq!(history.len(), 1);
        assert!(matches!(outcome, LoadOutcome::Seeded(_)));
        assert_eq!(fs::read_to_string(&store.path).unwrap(), "[[1,2,3]");
    }

    #[test]
    fn test_non_utf8_slot_falls_back_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        fs::write(&store.path, [0xff, 0xfe, b'[']).unwrap();
        let seed = dir.path().join("seed.json");
        fs::write(&seed, r#"{"history":[[1,2,3,4,5,6]]}"#).unwrap();

        let (history, outcome) = store.load_initial(&DocumentSource::File(seed), 100);
        assert_eq!(history.len(), 1);
        assert!(matches!(outcome, LoadOutcome::Seeded(_)));
        assert_eq!(fs::read(&store.path).unwrap(), vec![0xff, 0xfe, b'[']);
    }

    #[test]
    fn test_initial_load_truncates_to_max() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        store
            .save(&History::from_draws(make_test_draws(30), 100))
            .unwrap();

        let (history, _) = store.load_initial(&missing_source(), 10);
        assert_eq!(history.len(), 10);
    }
}
