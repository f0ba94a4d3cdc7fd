pub mod templates;
pub mod yml_settings;

pub use templates::{TemplateEntry, TemplateRegistry, DEFAULT_CONFIG_FILE};
pub use yml_settings::YmlSettings;
