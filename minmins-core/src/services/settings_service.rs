use minmins_common::*;

/// Background color backed by a settings store.
pub struct SettingsService<S: SettingsStorage> {
    storage: S,
    key: u32,
    default: BackgroundColor,
    background: BackgroundColor,
}

impl<S: SettingsStorage> SettingsService<S> {
    pub fn new(storage: S, config: &FaceConfig) -> Self {
        Self {
            storage,
            key: config.settings_key,
            default: config.default_background,
            background: config.default_background,
        }
    }

    /// Read the persisted background. Absent, zero and unreadable records
    /// all fall back to the default.
    pub async fn load(&mut self) -> BackgroundColor {
        self.background = match self.storage.read_int(self.key).await {
            Ok(Some(raw)) => match BackgroundColor::from_stored(raw) {
                Some(color) => color,
                None => self.default,
            },
            Ok(None) => {
                debug!("No background stored under key {}", self.key);
                self.default
            }
            Err(e) => {
                error!("Failed to read background: {:?}", DriverError(&e));
                self.default
            }
        };
        info!("Background loaded: {:#x}", self.background.raw());
        self.background
    }

    /// Persist `color` and make it current. The color is applied even when
    /// the write fails.
    pub async fn store(&mut self, color: BackgroundColor) -> SystemResult<BackgroundColor> {
        self.background = color;
        match self.storage.write_int(self.key, color.raw()).await {
            Ok(()) => {
                info!("Background stored: {:#x}", color.raw());
                Ok(color)
            }
            Err(e) => {
                error!("Failed to store background: {:?}", DriverError(&e));
                Err(SystemError::StorageError(StorageError::WriteFailed))
            }
        }
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    struct BrokenStorage;

    impl SettingsStorage for BrokenStorage {
        type Error = StorageError;

        async fn read_int(&mut self, _key: u32) -> Result<Option<i32>, Self::Error> {
            Err(StorageError::ReadFailed)
        }

        async fn write_int(&mut self, _key: u32, _value: i32) -> Result<(), Self::Error> {
            Err(StorageError::WriteFailed)
        }
    }

    #[test]
    fn test_default_when_nothing_stored() {
        let mut service = SettingsService::new(MemoryStorage::new(), &FaceConfig::default());
        assert_eq!(block_on(service.load()), BackgroundColor::WHITE);
    }

    #[test]
    fn test_stored_zero_means_default() {
        let mut storage = MemoryStorage::new();
        block_on(storage.write_int(KEY_BACKGROUND_COLOR, 0)).unwrap();
        let mut service = SettingsService::new(storage, &FaceConfig::default());
        assert_eq!(block_on(service.load()), BackgroundColor::WHITE);
    }

    #[test]
    fn test_store_then_load() {
        let config = FaceConfig::default();
        let mut service = SettingsService::new(MemoryStorage::new(), &config);
        block_on(async {
            for raw in [1, 0x00FF_0000, 0x0055_AAFF, -1] {
                let color = BackgroundColor::from_wire(raw);
                assert_eq!(service.store(color).await, Ok(color));
                assert_eq!(service.load().await, color);
            }
        });
    }

    #[test]
    fn test_black_is_not_absent() {
        let config = FaceConfig::default();
        let mut service = SettingsService::new(MemoryStorage::new(), &config);
        block_on(async {
            service.store(BackgroundColor::from_wire(0)).await.unwrap();
            assert_eq!(service.load().await, BackgroundColor::BLACK);
        });
    }

    #[test]
    fn test_broken_storage() {
        let mut service = SettingsService::new(BrokenStorage, &FaceConfig::default());
        block_on(async {
            assert_eq!(service.load().await, BackgroundColor::WHITE);
            let red = BackgroundColor::from_wire(0xFF0000);
            assert_eq!(
                service.store(red).await,
                Err(SystemError::StorageError(StorageError::WriteFailed))
            );
            assert_eq!(service.background(), red);
        });
    }
}
