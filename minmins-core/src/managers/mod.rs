mod face_manager;
mod render_manager;

pub use face_manager::FaceManager;
pub use render_manager::FaceRenderer;
