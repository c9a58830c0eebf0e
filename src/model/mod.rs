pub mod curated;
pub mod project;
pub mod risk;
pub mod stage;

pub use curated::CuratedProtocol;
pub use project::Project;
pub use risk::RiskLevel;
pub use stage::Stage;
