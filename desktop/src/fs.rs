use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use embedded_io::ErrorType;
use inkshot_core::fs::Storage;

/// `Storage` over the host filesystem, rooted at a base directory.
pub struct HostStorage {
    root: PathBuf,
}

impl HostStorage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl ErrorType for HostStorage {
    type Error = std::io::Error;
}

pub struct HostFile(File);

impl ErrorType for HostFile {
    type Error = std::io::Error;
}

impl embedded_io::Write for HostFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

impl Storage for HostStorage {
    type File<'a>
        = HostFile
    where
        Self: 'a;

    fn exists(&self, path: &str) -> std::io::Result<bool> {
        Ok(self.resolve(path).exists())
    }

    fn create_dir_all(&self, path: &str) -> std::io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    fn open_write(&self, path: &str) -> std::io::Result<HostFile> {
        log::debug!("host open for write: '{}'", path);
        Ok(HostFile(File::create(self.resolve(path))?))
    }

    fn remove(&self, path: &str) -> std::io::Result<()> {
        fs::remove_file(self.resolve(path))
    }
}
