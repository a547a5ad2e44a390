use crate::application::dto::ArchetypeRequest;
use crate::ports::outbound::{
    CatalogStore, CommandRunner, ProgressReporter, RemoteCatalogFetcher, TerminalRequest,
};
use crate::project_discovery::services::{
    AggregatedCatalog, CatalogAggregator, CatalogParser, CatalogText, CommandLine,
    CoordinateValidator, ARCHETYPE_TERMINAL_NAME,
};
use crate::shared::error::ExplorerError;
use crate::shared::Result;

pub const REMOTE_SOURCE: &str = "remote catalog";
pub const PROVIDED_SOURCE: &str = "provided catalog";
pub const LOCAL_SOURCE: &str = "local catalog";

/// ArchetypeCatalogUseCase - lists, refreshes and generates from archetypes
///
/// Catalog sources are consulted in a fixed order: the remote catalog (only
/// when asked for), the provided catalog, then the locally cached copy of
/// the last remote download. A source that is missing or broken is skipped
/// with a warning.
///
/// # Type Parameters
/// * `F` - RemoteCatalogFetcher implementation
/// * `S` - CatalogStore implementation
/// * `C` - CommandRunner implementation
/// * `P` - ProgressReporter implementation
pub struct ArchetypeCatalogUseCase<F, S, C, P> {
    fetcher: F,
    store: S,
    runner: C,
    progress_reporter: P,
    remote_url: String,
    executable: String,
}

impl<F, S, C, P> ArchetypeCatalogUseCase<F, S, C, P>
where
    F: RemoteCatalogFetcher,
    S: CatalogStore,
    C: CommandRunner,
    P: ProgressReporter,
{
    pub fn new(
        fetcher: F,
        store: S,
        runner: C,
        progress_reporter: P,
        remote_url: impl Into<String>,
        executable: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            store,
            runner,
            progress_reporter,
            remote_url: remote_url.into(),
            executable: executable.into(),
        }
    }

    /// Merged view of every available catalog
    pub async fn list(&self, include_remote: bool) -> AggregatedCatalog {
        let mut sources = Vec::with_capacity(3);

        if include_remote {
            self.progress_reporter
                .start_activity(&format!("Downloading {} ...", self.remote_url));
            // On failure the spinner ends with the skipped-source warning below
            let remote = match self.fetcher.fetch_catalog(&self.remote_url).await {
                Ok(content) => {
                    if let Err(e) = self.store.write_local(&content).await {
                        tracing::warn!("{}", e);
                    }
                    self.progress_reporter
                        .report_completion("✅ Remote catalog downloaded.");
                    CatalogText::new(REMOTE_SOURCE, Some(content))
                }
                Err(e) => CatalogText::unavailable(REMOTE_SOURCE, one_line(&e.to_string())),
            };
            sources.push(remote);
        }

        sources.push(CatalogText::new(
            PROVIDED_SOURCE,
            self.read_soft(self.store.read_provided().await),
        ));
        sources.push(CatalogText::new(
            LOCAL_SOURCE,
            self.read_soft(self.store.read_local().await),
        ));

        let catalog = CatalogAggregator::aggregate(sources);
        for skipped in &catalog.skipped {
            self.progress_reporter.report_error(&format!(
                "⚠️  Skipped {}: {}",
                skipped.source_name, skipped.reason
            ));
        }
        catalog
    }

    /// Downloads the remote catalog into the local cache
    ///
    /// # Returns
    /// Number of archetypes in the downloaded catalog
    ///
    /// # Errors
    /// Returns `CatalogFetchError` if the download fails or is not a catalog
    pub async fn update(&self) -> Result<usize> {
        self.progress_reporter
            .start_activity("Updating archetype catalog ... ");
        let content = match self.fetcher.fetch_catalog(&self.remote_url).await {
            Ok(content) => content,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to update the archetype catalog.");
                return Err(e);
            }
        };

        let archetypes = CatalogParser::parse(&content).map_err(|e| {
            self.progress_reporter
                .report_error("❌ Failed to update the archetype catalog.");
            ExplorerError::CatalogFetchError {
                source_name: self.remote_url.clone(),
                details: e.to_string(),
            }
        })?;

        self.store.write_local(&content).await?;
        self.progress_reporter.report_completion(&format!(
            "✅ Archetype catalog updated ({} archetypes).",
            archetypes.len()
        ));
        Ok(archetypes.len())
    }

    /// Runs `archetype:generate` for the requested archetype
    ///
    /// # Errors
    /// Returns `InvalidValue` for coordinates that are not plain Maven
    /// identifiers; nothing is run in that case
    pub async fn generate(&self, request: &ArchetypeRequest) -> Result<bool> {
        CoordinateValidator::validate("groupId", &request.group_id)?;
        CoordinateValidator::validate("artifactId", &request.artifact_id)?;
        if let Some(version) = &request.version {
            CoordinateValidator::validate("version", version)?;
        }

        let command = CommandLine::archetype_generate(
            &self.executable,
            &request.group_id,
            &request.artifact_id,
            request.version.as_deref(),
        );
        let terminal = TerminalRequest::new(command, ARCHETYPE_TERMINAL_NAME)
            .in_dir(request.destination.clone());
        self.progress_reporter
            .report(&format!("▶ [{}] {}", terminal.name, terminal.command));
        self.runner.run_in_terminal(&terminal).await
    }

    fn read_soft(&self, result: Result<Option<String>>) -> Option<String> {
        result.unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            None
        })
    }
}

fn one_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
