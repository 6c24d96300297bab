use crate::error::{QError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Semantic type of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Directory,
    File,
    Image,
    Video,
}

impl EntryType {
    /// Classifies an entry by its directory flag, then by file extension.
    pub fn classify(name: &str, is_dir: bool) -> Self {
        if is_dir {
            return EntryType::Directory;
        }

        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        Self::from_extension(extension)
    }

    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "svg" => EntryType::Image,
            "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "webm" => EntryType::Video,
            _ => EntryType::File,
        }
    }

    /// Short label shown in the Type column; also the key for custom colors.
    pub fn tag(&self) -> &'static str {
        match self {
            EntryType::Directory => "dir",
            EntryType::File => "file",
            EntryType::Image => "image",
            EntryType::Video => "video",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single filesystem item to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub entry_type: EntryType,
    pub size: u64,
    pub is_hidden: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, entry_type: EntryType, size: u64) -> Self {
        let name = name.into();
        let is_hidden = name.starts_with('.');
        Entry {
            name,
            entry_type,
            size,
            is_hidden,
        }
    }
}

/// Lists the immediate children of `dir_path` in enumeration order.
///
/// # Behavior
/// - Fails if the path does not exist, is not a directory, or cannot be read
/// - Skips hidden entries (names starting with '.') unless `include_hidden` is set
/// - Entries whose metadata cannot be read are logged and skipped
/// - Does not recurse and does not sort
pub fn list_entries(dir_path: &Path, include_hidden: bool) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(dir_path).map_err(|e| QError::io(dir_path, e))?;

    let mut entries = Vec::new();
    for entry_result in read_dir {
        let dir_entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir_path.display(), e);
                continue;
            }
        };

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if !include_hidden && name.starts_with('.') {
            continue;
        }

        // Does not follow symlinks, so a link to a directory lists as a file
        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Error getting file info for {}: {}", name, e);
                continue;
            }
        };

        let entry_type = EntryType::classify(&name, metadata.is_dir());
        entries.push(Entry::new(name, entry_type, metadata.len()));
    }

    log::debug!("Listed {} entries in {}", entries.len(), dir_path.display());
    Ok(entries)
}
