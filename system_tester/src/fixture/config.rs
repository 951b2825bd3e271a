//!
//! The fixture project build configuration.
//!

use serde::ser::SerializeMap;
use serde::Serialize;

///
/// The fixture project build configuration, written as `mkdocs.yml`.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// The site name.
    pub site_name: String,
    /// The navigation, in the display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavEntry>>,
}

impl Config {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(site_name: &str) -> Self {
        Self {
            site_name: site_name.to_owned(),
            nav: None,
        }
    }

    ///
    /// Appends a navigation entry.
    ///
    pub fn with_nav_entry(mut self, title: &str, page: &str) -> Self {
        self.nav
            .get_or_insert_with(Vec::new)
            .push(NavEntry::new(title, page));
        self
    }

    ///
    /// Serializes the configuration to YAML.
    ///
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self)
            .map_err(|error| anyhow::anyhow!("Build configuration serializing: {error}"))
    }
}

///
/// The navigation entry, serialized as a single-key `title: page` mapping.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// The displayed title.
    pub title: String,
    /// The page path relative to the docs directory.
    pub page: String,
}

impl NavEntry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(title: &str, page: &str) -> Self {
        Self {
            title: title.to_owned(),
            page: page.to_owned(),
        }
    }
}

impl Serialize for NavEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.title.as_str(), self.page.as_str())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn minimal() {
        let yaml = Config::new("Test Site").to_yaml().expect("Serializing");
        assert_eq!(yaml, "site_name: Test Site\n");
    }

    #[test]
    fn navigation() {
        let yaml = Config::new("Test Site")
            .with_nav_entry("Home", "index.md")
            .with_nav_entry("About", "about.md")
            .to_yaml()
            .expect("Serializing");

        let value: serde_yaml::Value = serde_yaml::from_str(yaml.as_str()).expect("Parsing");
        assert_eq!(value["site_name"].as_str(), Some("Test Site"));
        assert_eq!(value["nav"][0]["Home"].as_str(), Some("index.md"));
        assert_eq!(value["nav"][1]["About"].as_str(), Some("about.md"));
    }
}
