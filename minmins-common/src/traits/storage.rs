use heapless::LinearMap;

/// Persistent integer records, keyed like the host's settings store.
///
/// A record of value `0` is indistinguishable from a missing record for
/// callers of the face; writers must never store `0` for data they expect
/// to read back.
pub trait SettingsStorage {
    type Error: core::fmt::Debug;

    async fn read_int(&mut self, key: u32) -> Result<Option<i32>, Self::Error>;

    /// Completes once the value is durable.
    async fn write_int(&mut self, key: u32, value: i32) -> Result<(), Self::Error>;
}

/// RAM-only settings store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: LinearMap<u32, i32, 8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryStorageFull;

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            records: LinearMap::new(),
        }
    }

    /// Peek at a record without going through the async trait.
    pub fn get(&self, key: u32) -> Option<i32> {
        self.records.get(&key).copied()
    }
}

impl SettingsStorage for MemoryStorage {
    type Error = MemoryStorageFull;

    async fn read_int(&mut self, key: u32) -> Result<Option<i32>, Self::Error> {
        Ok(self.records.get(&key).copied())
    }

    async fn write_int(&mut self, key: u32, value: i32) -> Result<(), Self::Error> {
        self.records
            .insert(key, value)
            .map(|_| ())
            .map_err(|_| MemoryStorageFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        block_on(async {
            assert_eq!(storage.read_int(3).await, Ok(None));
            storage.write_int(3, 42).await.unwrap();
            storage.write_int(3, 43).await.unwrap();
            assert_eq!(storage.read_int(3).await, Ok(Some(43)));
        });
    }

    #[test]
    fn test_memory_storage_capacity() {
        let mut storage = MemoryStorage::new();
        block_on(async {
            for key in 0..8 {
                storage.write_int(key, 1).await.unwrap();
            }
            assert_eq!(storage.write_int(8, 1).await, Err(MemoryStorageFull));
            // overwriting an existing key still works
            assert_eq!(storage.write_int(0, 2).await, Ok(()));
        });
    }
}
