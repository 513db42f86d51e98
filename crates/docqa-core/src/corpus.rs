//! Loading a directory of plain-text files into a raw corpus.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::CorpusOptions;
use crate::error::{Error, Result};
use crate::traits::CorpusLoader;
use crate::types::Corpus;

/// Reads the regular files directly inside a directory.
///
/// Documents are keyed by file name and inserted in file-name order, so
/// the corpus order (and every ranking tie-break built on it) is stable
/// across runs and platforms.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLoader {
    options: CorpusOptions,
}

impl DirectoryLoader {
    pub fn new() -> Self { Self::default() }

    pub fn with_options(options: CorpusOptions) -> Self { Self { options } }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => {
                let bytes = fs::read(file_path).map_err(|e| Error::io(file_path, e))?;
                warn!(path = %file_path.display(), "file is not valid UTF-8, decoding lossily");
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.options.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.options.extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(root).follow_links(true).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                Error::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if self.accepts(entry.path()) {
                files.push(entry.into_path());
            } else {
                debug!(path = %entry.path().display(), "skipping file with unlisted extension");
            }
        }
        files.sort();
        Ok(files)
    }
}

impl CorpusLoader for DirectoryLoader {
    fn load(&self, dir: &Path) -> Result<Corpus<String>> {
        let meta = fs::metadata(dir).map_err(|e| Error::io(dir, e))?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }
        let files = self.list_files(dir)?;
        if files.is_empty() {
            warn!(dir = %dir.display(), "no corpus files found");
        }
        let mut corpus = Corpus::new();
        for file_path in &files {
            let name = file_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let content = self.read_file_content(file_path)?;
            debug!(file = %name, bytes = content.len(), "loaded document");
            corpus.insert(name, content);
        }
        info!(dir = %dir.display(), documents = corpus.len(), "loaded corpus");
        Ok(corpus)
    }
}
