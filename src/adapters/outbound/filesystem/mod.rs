/// Filesystem adapters for scanning, reading and persisting files
mod catalog_store;
mod descriptor_scanner;
mod file_reader;
mod file_writer;
mod history_store;

pub use catalog_store::{FileCatalogStore, LOCAL_CATALOG_FILENAME};
pub use descriptor_scanner::WalkDirScanner;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use history_store::FileHistoryRepository;
