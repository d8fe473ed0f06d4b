//! NOR flash emulation for the simulator and for tests.
//!
//! Erased bytes read `0xFF` and writes can only clear bits, like real NOR.
//! With a backing file, the whole image is written out after every change so
//! a restarted simulator sees the same contents.

use std::fs;
use std::path::{Path, PathBuf};

use embedded_storage::nor_flash::{ErrorType, NorFlashError, NorFlashErrorKind};
use embedded_storage_async::nor_flash::{MultiwriteNorFlash, NorFlash, ReadNorFlash};

/// Erase page size in bytes.
pub const PAGE_SIZE: usize = 1024;
const WORD_SIZE: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum SimulatedFlashError {
    #[error("flash access rejected: {0:?}")]
    Access(NorFlashErrorKind),
    #[error("backing file: {0}")]
    Io(#[from] std::io::Error),
}

impl NorFlashError for SimulatedFlashError {
    fn kind(&self) -> NorFlashErrorKind {
        match self {
            SimulatedFlashError::Access(kind) => *kind,
            SimulatedFlashError::Io(_) => NorFlashErrorKind::Other,
        }
    }
}

impl From<NorFlashErrorKind> for SimulatedFlashError {
    fn from(kind: NorFlashErrorKind) -> Self {
        SimulatedFlashError::Access(kind)
    }
}

pub struct SimulatedFlash {
    data: Vec<u8>,
    backing: Option<PathBuf>,
}

impl SimulatedFlash {
    /// Erased, RAM-only flash of `capacity` bytes (rounded up to whole pages).
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0xFF; capacity.div_ceil(PAGE_SIZE) * PAGE_SIZE],
            backing: None,
        }
    }

    /// Flash image persisted at `path`. A missing or short file is padded
    /// with erased bytes; a longer one is cut to `capacity`.
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Result<Self, SimulatedFlashError> {
        let path = path.as_ref();
        let mut flash = Self::new(capacity);
        match fs::read(path) {
            Ok(image) => {
                let len = image.len().min(flash.data.len());
                flash.data[..len].copy_from_slice(&image[..len]);
                log::info!("Loaded flash image {} ({} bytes)", path.display(), len);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Creating flash image {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }
        flash.backing = Some(path.to_path_buf());
        flash.persist()?;
        Ok(flash)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn check(&self, offset: u32, len: usize, align: usize) -> Result<(), SimulatedFlashError> {
        let offset = offset as usize;
        if offset % align != 0 || len % align != 0 {
            return Err(NorFlashErrorKind::NotAligned.into());
        }
        if offset + len > self.data.len() {
            return Err(NorFlashErrorKind::OutOfBounds.into());
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), SimulatedFlashError> {
        if let Some(path) = &self.backing {
            fs::write(path, &self.data)?;
        }
        Ok(())
    }
}

impl ErrorType for SimulatedFlash {
    type Error = SimulatedFlashError;
}

impl ReadNorFlash for SimulatedFlash {
    const READ_SIZE: usize = 1;

    async fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.check(offset, bytes.len(), Self::READ_SIZE)?;
        let start = offset as usize;
        bytes.copy_from_slice(&self.data[start..start + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl NorFlash for SimulatedFlash {
    const WRITE_SIZE: usize = WORD_SIZE;
    const ERASE_SIZE: usize = PAGE_SIZE;

    async fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        if to < from {
            return Err(NorFlashErrorKind::OutOfBounds.into());
        }
        self.check(from, (to - from) as usize, Self::ERASE_SIZE)?;
        self.data[from as usize..to as usize].fill(0xFF);
        log::trace!("Erased flash {:#x}..{:#x}", from, to);
        self.persist()
    }

    async fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check(offset, bytes.len(), Self::WRITE_SIZE)?;
        let start = offset as usize;
        for (cell, byte) in self.data[start..start + bytes.len()].iter_mut().zip(bytes) {
            *cell &= *byte;
        }
        self.persist()
    }
}

impl MultiwriteNorFlash for SimulatedFlash {}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_new_flash_is_erased() {
        let flash = SimulatedFlash::new(PAGE_SIZE + 1);
        assert_eq!(flash.capacity(), 2 * PAGE_SIZE);
        assert!(flash.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_write_only_clears_bits() {
        let mut flash = SimulatedFlash::new(PAGE_SIZE);
        let mut out = [0u8; 4];
        block_on(async {
            flash.write(0, &[0x0F, 0xF0, 0xAA, 0x55]).await.unwrap();
            flash.write(0, &[0xFF, 0x00, 0xFF, 0xFF]).await.unwrap();
            flash.read(0, &mut out).await.unwrap();
        });
        assert_eq!(out, [0x0F, 0x00, 0xAA, 0x55]);
    }

    #[test]
    fn test_erase_restores_page() {
        let mut flash = SimulatedFlash::new(2 * PAGE_SIZE);
        block_on(async {
            flash.write(PAGE_SIZE as u32, &[0; 4]).await.unwrap();
            flash.erase(PAGE_SIZE as u32, 2 * PAGE_SIZE as u32).await.unwrap();
        });
        assert!(flash.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_rejects_bad_access() {
        let mut flash = SimulatedFlash::new(PAGE_SIZE);
        block_on(async {
            let unaligned = flash.write(1, &[0; 4]).await.unwrap_err();
            assert_eq!(unaligned.kind(), NorFlashErrorKind::NotAligned);
            let outside = flash.erase(0, 2 * PAGE_SIZE as u32).await.unwrap_err();
            assert_eq!(outside.kind(), NorFlashErrorKind::OutOfBounds);
        });
    }

    #[test]
    fn test_file_backing_survives_reopen() {
        let path = std::env::temp_dir().join(format!("simulated-flash-{}.bin", std::process::id()));
        let _ = fs::remove_file(&path);

        let mut flash = SimulatedFlash::open(&path, PAGE_SIZE).unwrap();
        block_on(flash.write(8, &[1, 2, 3, 4])).unwrap();
        drop(flash);

        let mut reopened = SimulatedFlash::open(&path, PAGE_SIZE).unwrap();
        let mut out = [0u8; 4];
        block_on(reopened.read(8, &mut out)).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);

        let _ = fs::remove_file(&path);
    }
}
