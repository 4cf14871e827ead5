pub mod card;
pub mod error;
pub mod hover;
pub mod loader;

pub use card::{CardView, ProductCard};
pub use error::PreviewError;
pub use hover::{HoverPhase, HoverPreviewController, HoverSnapshot, PreloadStatus};
pub use loader::{HttpImageLoader, ImageLoader};
