use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// One named template entry of the YAML configuration
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct YmlSettings {
    pub name: String,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub case_sensitive: bool,
}
