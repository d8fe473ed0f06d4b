pub mod clock_service;
pub mod color_service;
pub mod connectivity_service;
pub mod placement_service;
pub mod protocol_service;
pub mod settings_service;
