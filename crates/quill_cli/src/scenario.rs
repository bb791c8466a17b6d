//! Scenario file handling
//!
//! A scenario describes a text field's markup, the options it is attached
//! with, and a list of interaction steps:
//!
//! ```toml
//! name = "required field"
//!
//! [field]
//! required = true
//! help_text = { validation_msg = true }
//!
//! [[step]]
//! action = "focus"
//!
//! [[step]]
//! action = "blur"
//! ```

use anyhow::{Context, Result};
use quill_dom::TextFieldMarkup;
use quill_textfield::TextFieldOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A scenario file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub field: TextFieldMarkup,
    #[serde(default)]
    pub options: TextFieldOptions,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One interaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Focus,
    Blur,
    /// Change the value and fire `input`
    Input { value: String },
    /// Change the value without firing anything
    SetValue { value: String },
    /// Press the input at a viewport x coordinate
    Press {
        #[serde(default)]
        x: f32,
    },
    ClickIcon,
    /// Enter key on the icon
    EnterIcon,
    SetValid { valid: bool },
    SetDisabled { disabled: bool },
    /// Bottom line transition finished
    TransitionEnd {
        #[serde(default = "default_property")]
        property: String,
    },
    Destroy,
}

fn default_property() -> String {
    "opacity".to_string()
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Focus => "focus",
            Step::Blur => "blur",
            Step::Input { .. } => "input",
            Step::SetValue { .. } => "set_value",
            Step::Press { .. } => "press",
            Step::ClickIcon => "click_icon",
            Step::EnterIcon => "enter_icon",
            Step::SetValid { .. } => "set_valid",
            Step::SetDisabled { .. } => "set_disabled",
            Step::TransitionEnd { .. } => "transition_end",
            Step::Destroy => "destroy",
        }
    }
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No scenario found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let scenario = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(scenario)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        Ok(scenario)
    }

    /// Name to show in reports, falling back to the file stem
    pub fn display_name(&self, path: &Path) -> String {
        self.name.clone().unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "scenario".to_string())
        })
    }
}
