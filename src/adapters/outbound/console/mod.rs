/// Console adapters for progress reporting and terminal rendering
mod catalog_renderer;
mod progress_reporter;
mod tree_renderer;

pub use catalog_renderer::CatalogRenderer;
pub use progress_reporter::StderrProgressReporter;
pub use tree_renderer::TreeRenderer;
