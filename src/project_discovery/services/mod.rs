mod catalog_aggregator;
mod catalog_parser;
mod command_line;
mod coordinate_validator;
mod descriptor_parser;
pub mod xml_reader;

pub use catalog_aggregator::{AggregatedCatalog, CatalogAggregator, CatalogText, SkippedSource};
pub use catalog_parser::CatalogParser;
pub use command_line::{CommandLine, ARCHETYPE_TERMINAL_NAME, DEFAULT_GOALS};
pub use coordinate_validator::CoordinateValidator;
pub use descriptor_parser::DescriptorParser;
pub use xml_reader::ParseError;
