/// Mock implementations for testing
mod mock_catalog_store;
mod mock_command_runner;
mod mock_history_repository;
mod mock_progress_reporter;
mod mock_remote_catalog_fetcher;

pub use mock_catalog_store::MockCatalogStore;
pub use mock_command_runner::MockCommandRunner;
pub use mock_history_repository::MockHistoryRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_remote_catalog_fetcher::MockRemoteCatalogFetcher;
