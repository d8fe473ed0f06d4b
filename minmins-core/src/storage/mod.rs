mod flash_storage;

pub use flash_storage::FlashSettingsStorage;
