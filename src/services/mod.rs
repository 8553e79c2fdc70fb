pub mod category_index;

pub use category_index::{global, install_global, CategoryIndexCache, PreloadStatus};
