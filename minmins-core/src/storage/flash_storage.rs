use core::ops::Range;

use embedded_storage_async::nor_flash::NorFlash;
use minmins_common::*;
use sequential_storage::cache::NoCache;
use sequential_storage::map::{fetch_item, store_item};

/// 数据缓冲区大小，足够容纳一个 u32 键和一个 i32 值
const DATA_BUFFER_SIZE: usize = 64;

/// Settings records kept in a `sequential-storage` map on NOR flash.
///
/// `range` must cover at least two erase pages.
pub struct FlashSettingsStorage<F: NorFlash> {
    flash: F,
    flash_range: Range<u32>,
    key_cache: NoCache,
    data_buffer: [u8; DATA_BUFFER_SIZE],
}

impl<F: NorFlash> FlashSettingsStorage<F> {
    pub fn new(flash: F, flash_range: Range<u32>) -> Self {
        Self {
            flash,
            flash_range,
            key_cache: NoCache::new(),
            data_buffer: [0; DATA_BUFFER_SIZE],
        }
    }

    /// Give the flash back, e.g. to reopen it.
    pub fn release(self) -> F {
        self.flash
    }
}

impl<F: NorFlash> SettingsStorage for FlashSettingsStorage<F> {
    type Error = sequential_storage::Error<F::Error>;

    async fn read_int(&mut self, key: u32) -> Result<Option<i32>, Self::Error> {
        fetch_item::<u32, i32, _>(
            &mut self.flash,
            self.flash_range.clone(),
            &mut self.key_cache,
            &mut self.data_buffer,
            &key,
        )
        .await
    }

    async fn write_int(&mut self, key: u32, value: i32) -> Result<(), Self::Error> {
        store_item(
            &mut self.flash,
            self.flash_range.clone(),
            &mut self.key_cache,
            &mut self.data_buffer,
            &key,
            &value,
        )
        .await?;
        trace!("Flash record {} written", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use simulated_flash::{PAGE_SIZE, SimulatedFlash};

    const RANGE: Range<u32> = 0..(4 * PAGE_SIZE as u32);

    fn storage() -> FlashSettingsStorage<SimulatedFlash> {
        FlashSettingsStorage::new(SimulatedFlash::new(4 * PAGE_SIZE), RANGE)
    }

    #[test]
    fn test_empty_flash_has_no_record() {
        let mut storage = storage();
        assert!(matches!(block_on(storage.read_int(KEY_BACKGROUND_COLOR)), Ok(None)));
    }

    #[test]
    fn test_flash_round_trip() {
        let mut storage = storage();
        block_on(async {
            storage.write_int(KEY_BACKGROUND_COLOR, 0x00FF_0000).await.unwrap();
            storage.write_int(KEY_BACKGROUND_COLOR, 1).await.unwrap();
            storage.write_int(7, -20).await.unwrap();

            assert_eq!(storage.read_int(KEY_BACKGROUND_COLOR).await.unwrap(), Some(1));
            assert_eq!(storage.read_int(7).await.unwrap(), Some(-20));
        });
    }

    #[test]
    fn test_survives_reopen() {
        let mut storage = storage();
        block_on(storage.write_int(KEY_BACKGROUND_COLOR, 0x0055_AAFF)).unwrap();

        let mut reopened = FlashSettingsStorage::new(storage.release(), RANGE);
        assert_eq!(
            block_on(reopened.read_int(KEY_BACKGROUND_COLOR)).unwrap(),
            Some(0x0055_AAFF)
        );
    }

    #[test]
    fn test_many_writes_wrap_pages() {
        let mut storage = storage();
        block_on(async {
            for value in 1..=500 {
                storage.write_int(KEY_BACKGROUND_COLOR, value).await.unwrap();
            }
            assert_eq!(storage.read_int(KEY_BACKGROUND_COLOR).await.unwrap(), Some(500));
        });
    }
}
