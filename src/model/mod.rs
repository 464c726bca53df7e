pub mod registry;
pub mod settings;

pub use registry::{RegistryEntry, default_registries};
pub use settings::Settings;
