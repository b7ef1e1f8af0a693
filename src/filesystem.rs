//! File access used by the asset loaders and the OBJ export
//!
//! Loaders take a `&dyn FileSystem` so they can run against the real disk or
//! against an in-memory store in tests.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, RwLock};

pub trait FileSystem: Sync {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn create_file(&self, path: &Path) -> io::Result<Box<dyn Write>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let data = self.read_file(path)?;
        String::from_utf8(data).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid UTF-8 data in file {}: {}", path.display(), e),
            )
        })
    }
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn create_file(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        let file = File::create(path)?;
        Ok(Box::new(io::BufWriter::new(file)))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        std::fs::write(path, data)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

type Files = Arc<RwLock<HashMap<String, Vec<u8>>>>;

/// Files kept in memory, keyed by their path as written
#[derive(Default, Clone)]
pub struct MemoryFileSystem {
    files: Files,
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("File not found: {path}"))
}

fn poisoned() -> io::Error {
    io::Error::other("memory file system lock poisoned")
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, returning the file system for chaining.
    pub fn with_file<P: AsRef<Path>, D: Into<Vec<u8>>>(self, path: P, data: D) -> Self {
        if let Ok(mut files) = self.files.write() {
            files.insert(key(path.as_ref()), data.into());
        }
        self
    }

    pub fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.read().ok()?.get(path).cloned()
    }

    pub fn list_files(&self) -> Vec<String> {
        self.files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Buffers writes and publishes them to the store on flush and drop
struct MemoryFileWriter {
    path: String,
    buffer: Vec<u8>,
    files: Files,
}

impl MemoryFileWriter {
    fn publish(&self) -> io::Result<()> {
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.insert(self.path.clone(), self.buffer.clone());
        Ok(())
    }
}

impl Write for MemoryFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.publish()
    }
}

impl Drop for MemoryFileWriter {
    fn drop(&mut self) {
        let _ = self.publish();
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let path = key(path);
        let files = self.files.read().map_err(|_| poisoned())?;
        files.get(&path).cloned().ok_or_else(|| not_found(&path))
    }

    fn create_file(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(MemoryFileWriter {
            path: key(path),
            buffer: Vec::new(),
            files: Arc::clone(&self.files),
        }))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut files = self.files.write().map_err(|_| poisoned())?;
        files.insert(key(path), data.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(&key(path)))
            .unwrap_or(false)
    }
}
