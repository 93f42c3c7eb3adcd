pub mod models;
pub mod region;

// Plain data shared by the engine and the GUI. No behaviour beyond
// construction helpers and code lookups lives here.
pub use models::{Advisory, AdvisoryKind, AdvisoryTopic, RuleInputs, Snapshot};
pub use region::{Region, UnknownRegion};
