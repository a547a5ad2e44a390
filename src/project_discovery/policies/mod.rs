mod mru_policy;

pub use mru_policy::MruPolicy;
