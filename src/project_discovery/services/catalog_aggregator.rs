use super::catalog_parser::CatalogParser;
use crate::project_discovery::domain::Archetype;
use std::collections::HashMap;

/// Raw text of one catalog source; `content` is `None` when the source was
/// unavailable (no file, failed download)
#[derive(Debug, Clone)]
pub struct CatalogText {
    pub source_name: String,
    pub content: Option<String>,
    /// Why `content` is missing, when known
    pub unavailable_reason: Option<String>,
}

impl CatalogText {
    pub fn new(source_name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            source_name: source_name.into(),
            content,
            unavailable_reason: None,
        }
    }

    pub fn unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            content: None,
            unavailable_reason: Some(reason.into()),
        }
    }
}

/// A source that could not be used, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    pub source_name: String,
    pub reason: String,
}

/// Result of merging every usable source
#[derive(Debug, Clone, Default)]
pub struct AggregatedCatalog {
    pub archetypes: Vec<Archetype>,
    pub skipped: Vec<SkippedSource>,
}

/// CatalogAggregator service merging archetype catalogs
///
/// Sources are parsed independently; an absent or malformed source is
/// recorded in `skipped` and never aborts the aggregation. Entries are keyed
/// by `(group_id, artifact_id)` and keep the order in which keys were first
/// seen.
pub struct CatalogAggregator;

impl CatalogAggregator {
    pub fn aggregate<I>(sources: I) -> AggregatedCatalog
    where
        I: IntoIterator<Item = CatalogText>,
    {
        let mut catalog = AggregatedCatalog::default();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for source in sources {
            let Some(content) = source.content else {
                catalog.skipped.push(SkippedSource {
                    source_name: source.source_name,
                    reason: source
                        .unavailable_reason
                        .unwrap_or_else(|| "not available".to_string()),
                });
                continue;
            };

            let entries = match CatalogParser::parse(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    catalog.skipped.push(SkippedSource {
                        source_name: source.source_name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            for entry in entries {
                let key = (entry.group_id.clone(), entry.artifact_id.clone());
                match index.get(&key) {
                    Some(&position) => catalog.archetypes[position].merge(entry),
                    None => {
                        index.insert(key, catalog.archetypes.len());
                        catalog.archetypes.push(entry);
                    }
                }
            }
        }

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: Vec<(&str, &str, Vec<&str>, Option<&str>)>) -> String {
        let mut xml = String::from("<archetype-catalog><archetypes>");
        for (group, artifact, versions, description) in entries {
            xml.push_str("<archetype>");
            xml.push_str(&format!("<groupId>{}</groupId><artifactId>{}</artifactId>", group, artifact));
            for version in versions {
                xml.push_str(&format!("<version>{}</version>", version));
            }
            if let Some(description) = description {
                xml.push_str(&format!("<description>{}</description>", description));
            }
            xml.push_str("</archetype>");
        }
        xml.push_str("</archetypes></archetype-catalog>");
        xml
    }

    #[test]
    fn test_merges_versions_by_key() {
        let result = CatalogAggregator::aggregate(vec![
            CatalogText::new("remote", Some(catalog(vec![("org.x", "quickstart", vec!["1.0"], None)]))),
            CatalogText::new("local", Some(catalog(vec![("org.x", "quickstart", vec!["2.0"], None)]))),
        ]);

        assert_eq!(result.archetypes.len(), 1);
        assert_eq!(result.archetypes[0].versions, vec!["1.0", "2.0"]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_prefers_first_non_empty_description() {
        let result = CatalogAggregator::aggregate(vec![
            CatalogText::new("a", Some(catalog(vec![("g", "x", vec![], None)]))),
            CatalogText::new("b", Some(catalog(vec![("g", "x", vec![], Some("from b"))]))),
            CatalogText::new("c", Some(catalog(vec![("g", "x", vec![], Some("from c"))]))),
        ]);
        assert_eq!(result.archetypes[0].description.as_deref(), Some("from b"));
    }

    #[test]
    fn test_keeps_first_seen_order() {
        let result = CatalogAggregator::aggregate(vec![
            CatalogText::new("a", Some(catalog(vec![("g", "b", vec![], None), ("g", "a", vec![], None)]))),
            CatalogText::new("b", Some(catalog(vec![("g", "c", vec![], None), ("g", "b", vec![], None)]))),
        ]);
        let labels: Vec<String> = result.archetypes.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["g:b", "g:a", "g:c"]);
    }

    #[test]
    fn test_skips_absent_and_malformed_sources() {
        let result = CatalogAggregator::aggregate(vec![
            CatalogText::new("remote", None),
            CatalogText::new("provided", Some("<archetype-catalog><oops>".to_string())),
            CatalogText::new("local", Some(catalog(vec![("g", "ok", vec!["1"], None)]))),
        ]);
        assert_eq!(result.archetypes.len(), 1);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.skipped[0].source_name, "remote");
        assert_eq!(result.skipped[1].source_name, "provided");
        assert_eq!(result.skipped[0].reason, "not available");
    }

    #[test]
    fn test_unavailable_reason_is_kept() {
        let result = CatalogAggregator::aggregate(vec![CatalogText::unavailable(
            "remote",
            "timed out",
        )]);
        assert_eq!(result.skipped[0].reason, "timed out");
    }

    #[test]
    fn test_no_sources_yields_empty_catalog() {
        let result = CatalogAggregator::aggregate(Vec::new());
        assert!(result.archetypes.is_empty());
        assert!(result.skipped.is_empty());
    }
}
