/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, processes, console).
pub mod catalog_repository;
pub mod command_runner;
pub mod descriptor_reader;
pub mod descriptor_scanner;
pub mod history_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod tree_observer;

pub use catalog_repository::{CatalogStore, RemoteCatalogFetcher};
pub use command_runner::{CapturedOutput, CommandRunner, TerminalRequest};
pub use descriptor_reader::{DescriptorReader, DescriptorSource};
pub use descriptor_scanner::DescriptorScanner;
pub use history_repository::HistoryRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use tree_observer::{NoopTreeObserver, TreeObserver};
