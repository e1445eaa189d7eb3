use crossbeam_channel::{Receiver, Sender, unbounded};
use std::path::PathBuf;
use std::thread;

/// Result of one background file read.
pub struct LoadedFile {
    pub path: PathBuf,
    pub contents: std::io::Result<String>,
}

/// Reads import files off the UI thread. Each request produces exactly one
/// [`LoadedFile`], picked up by polling [`ImportLoader::poll`] once per frame.
pub struct ImportLoader {
    tx: Sender<LoadedFile>,
    rx: Receiver<LoadedFile>,
    pending: usize,
}

impl Default for ImportLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportLoader {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx, pending: 0 }
    }

    pub fn request(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let tx = self.tx.clone();
        self.pending += 1;
        log::info!("Reading {}", path.display());

        thread::spawn(move || {
            let contents = std::fs::read_to_string(&path);
            // Receiver lives as long as the loader; a closed channel means the app is gone.
            let _ = tx.send(LoadedFile { path, contents });
        });
    }

    pub fn poll(&mut self) -> Option<LoadedFile> {
        let loaded = self.rx.try_recv().ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(loaded)
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for(loader: &mut ImportLoader) -> LoadedFile {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(loaded) = loader.poll() {
                return loaded;
            }
            assert!(Instant::now() < deadline, "loader never delivered");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn delivers_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lamps.json");
        std::fs::write(&path, "[0,1]").unwrap();

        let mut loader = ImportLoader::new();
        loader.request(&path);
        assert!(loader.is_busy());

        let loaded = wait_for(&mut loader);
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.contents.unwrap(), "[0,1]");
        assert!(!loader.is_busy());
    }

    #[test]
    fn delivers_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = ImportLoader::new();
        loader.request(dir.path().join("missing.json"));
        assert!(wait_for(&mut loader).contents.is_err());
    }

    #[test]
    fn idle_loader_has_nothing() {
        let mut loader = ImportLoader::new();
        assert!(loader.poll().is_none());
        assert!(!loader.is_busy());
    }
}
