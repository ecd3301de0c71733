use core::result::Result;

use embedded_io::{ErrorType, Write};

/// Write-side storage abstraction. Dropping a `File` closes it.
pub trait Storage: ErrorType {
    type File<'a>: Write
    where
        Self: 'a;

    fn exists(&self, path: &str) -> Result<bool, Self::Error>;
    fn create_dir_all(&self, path: &str) -> Result<(), Self::Error>;
    fn open_write(&self, path: &str) -> Result<Self::File<'_>, Self::Error>;
    fn remove(&self, path: &str) -> Result<(), Self::Error>;
}
