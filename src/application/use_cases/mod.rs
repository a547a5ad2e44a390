/// Use cases module containing application business logic orchestration
mod archetype_catalog;
mod custom_goal;
mod effective_pom;
mod project_tree;
mod run_goal;
mod walk_tree;

pub use archetype_catalog::{
    ArchetypeCatalogUseCase, LOCAL_SOURCE, PROVIDED_SOURCE, REMOTE_SOURCE,
};
pub use custom_goal::CustomGoalUseCase;
pub use effective_pom::EffectivePomUseCase;
pub use project_tree::{ProjectTreeUseCase, TreeSettings};
pub use run_goal::RunGoalUseCase;
pub use walk_tree::WalkTreeUseCase;
