//! Best score persistence
//!
//! A single record (score and the level it was reached on) stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Best run so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScore {
    pub score: u32,
    /// Level the record was set on
    pub level: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns true if it beat the stored score.
    pub fn submit(&mut self, score: u32, level: u32) -> bool {
        if score == 0 || score <= self.score {
            return false;
        }
        self.score = score;
        self.level = level;
        true
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from a file; missing or corrupt files start fresh
    pub fn load(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            log::info!("No high score found, starting fresh");
            return Self::new();
        };

        match Self::from_json(&json) {
            Ok(record) => {
                log::info!("Loaded high score {} (level {})", record.score, record.level);
                record
            }
            Err(err) => {
                log::warn!("Discarding unreadable high score in {}: {err}", path.display());
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("High score saved ({})", self.score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_only_keeps_better_scores() {
        let mut best = HighScore::new();
        assert!(!best.submit(0, 1));
        assert!(best.submit(1200, 3));
        assert!(!best.submit(1200, 5));
        assert!(!best.submit(800, 7));
        assert_eq!(best, HighScore { score: 1200, level: 3 });
        assert!(best.submit(5000, 9));
        assert_eq!(best.level, 9);
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = std::env::temp_dir().join(format!("detective-gulls-corrupt-{}.json", std::process::id()));
        std::fs::write(&path, "][").unwrap();
        assert_eq!(HighScore::load(&path), HighScore::new());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("detective-gulls-best-{}.json", std::process::id()));
        let best = HighScore { score: 4321, level: 12 };
        best.save(&path).unwrap();
        assert_eq!(HighScore::load(&path), best);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_fields_default() {
        let best = HighScore::from_json(r#"{ "score": 10 }"#).unwrap();
        assert_eq!(best, HighScore { score: 10, level: 0 });
    }
}
