/// Project discovery domain - pure models and algorithms
///
/// Nothing in here touches the filesystem, the network or a subprocess.
pub mod domain;
pub mod policies;
pub mod services;
