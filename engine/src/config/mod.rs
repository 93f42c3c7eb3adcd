pub mod settings;

pub use settings::AdvisorSettings;
