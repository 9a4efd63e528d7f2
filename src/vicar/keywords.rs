//! Descriptions of standard VICAR label keywords
//!
//! The table is read from the bundled `vicar_keywords.toml` and used to
//! annotate label listings in the analysis report.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::vicar::errors::{VicarError, VicarResult};

lazy_static! {
    // Parse the bundled TOML table once
    static ref KEYWORD_DEFINITIONS: KeywordDefinitions = {
        let content = include_str!("../../vicar_keywords.toml");
        KeywordDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse VICAR keyword definitions: {}", e);
            KeywordDefinitions::default()
        })
    };
}

/// Keyword descriptions grouped by label section
#[derive(Debug, Default)]
pub struct KeywordDefinitions {
    /// Maps keyword names to descriptions
    pub descriptions: HashMap<String, String>,
    /// Maps keyword names to the section they were listed under
    pub sections: HashMap<String, String>,
}

impl KeywordDefinitions {
    /// Parse keyword definitions from a TOML string
    pub fn from_str(content: &str) -> VicarResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| VicarError::GenericError(format!("Failed to parse TOML: {}", e)))?;

        let mut defs = KeywordDefinitions::default();
        if let Some(root) = toml_value.as_table() {
            for (section, table) in root {
                let Some(table) = table.as_table() else { continue };
                for (key, description) in table {
                    if let Some(text) = description.as_str() {
                        let key = key.to_uppercase();
                        defs.descriptions.insert(key.clone(), text.to_string());
                        defs.sections.insert(key, section.clone());
                    }
                }
            }
        }

        Ok(defs)
    }

    /// Get a keyword description, if known
    pub fn description(&self, key: &str) -> Option<&str> {
        self.descriptions.get(&key.to_uppercase()).map(String::as_str)
    }

    /// Get the label section a keyword belongs to, if known
    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections.get(&key.to_uppercase()).map(String::as_str)
    }
}

/// Describes a label keyword using the bundled table
pub fn describe_keyword(key: &str) -> &'static str {
    KEYWORD_DEFINITIONS.description(key).unwrap_or("(non-standard)")
}

/// Section of a standard keyword (`system`, `history` or `property`)
pub fn keyword_section(key: &str) -> Option<&'static str> {
    KEYWORD_DEFINITIONS.section(key)
}
