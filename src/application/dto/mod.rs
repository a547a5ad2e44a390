/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod archetype_request;
mod output_format;
mod tree_entry;

pub use archetype_request::ArchetypeRequest;
pub use output_format::OutputFormat;
pub use tree_entry::TreeEntry;
