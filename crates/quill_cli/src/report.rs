//! Replay reports

use anyhow::{Context, Result};
use quill_dom::{Document, ElementId, ElementSnapshot, TextField, TextFieldElements};
use serde::Serialize;
use std::fmt::Write;

/// What happened during one step
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub action: &'static str,
    /// Field state after the step, `None` once destroyed
    pub state: Option<String>,
    /// Notifications emitted by the step
    pub emitted: Vec<String>,
}

/// Final state of a replayed scenario
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub name: String,
    pub steps: Vec<StepRecord>,
    pub root: ElementSnapshot,
    pub input: ElementSnapshot,
    pub label: Option<ElementSnapshot>,
    pub icon: Option<ElementSnapshot>,
    pub bottom_line: Option<ElementSnapshot>,
    pub help_text: Option<ElementSnapshot>,
    /// Live listeners left in the document
    pub listeners: usize,
    pub destroyed: bool,
}

impl Report {
    pub fn capture(
        name: &str,
        doc: &Document,
        elements: &TextFieldElements,
        field: Option<&TextField>,
        steps: Vec<StepRecord>,
    ) -> Self {
        let snapshot = |id: Option<ElementId>| id.and_then(|id| doc.snapshot(id));
        Self {
            name: name.to_string(),
            steps,
            root: doc.snapshot(elements.root).unwrap_or_else(|| empty("div")),
            input: doc.snapshot(elements.input).unwrap_or_else(|| empty("input")),
            label: snapshot(elements.label),
            icon: snapshot(elements.icon),
            bottom_line: snapshot(elements.bottom_line),
            help_text: snapshot(elements.help_text),
            listeners: doc.listener_count(),
            destroyed: field.is_none(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Scenario: {}", self.name);

        for step in &self.steps {
            let state = step.state.as_deref().unwrap_or("destroyed");
            let _ = write!(out, "  {:>2}. {:<15} -> {}", step.index, step.action, state);
            if !step.emitted.is_empty() {
                let _ = write!(out, "  [{}]", step.emitted.join(", "));
            }
            out.push('\n');
        }

        out.push('\n');
        write_element(&mut out, "root", Some(&self.root));
        write_element(&mut out, "input", Some(&self.input));
        write_element(&mut out, "label", self.label.as_ref());
        write_element(&mut out, "icon", self.icon.as_ref());
        write_element(&mut out, "bottom line", self.bottom_line.as_ref());
        write_element(&mut out, "help text", self.help_text.as_ref());
        let _ = writeln!(out, "listeners: {}", self.listeners);
        out
    }
}

fn empty(tag: &str) -> ElementSnapshot {
    ElementSnapshot {
        tag: tag.to_string(),
        classes: Vec::new(),
        attributes: Default::default(),
        native: None,
    }
}

fn write_element(out: &mut String, label: &str, element: Option<&ElementSnapshot>) {
    let Some(element) = element else {
        return;
    };
    let _ = write!(out, "{label:<12} <{}>", element.tag);
    if !element.classes.is_empty() {
        let _ = write!(out, " .{}", element.classes.join(" ."));
    }
    for (name, value) in &element.attributes {
        let _ = write!(out, " {name}=\"{value}\"");
    }
    if let Some(native) = &element.native {
        let _ = write!(out, " value={:?}", native.value);
        if native.disabled {
            out.push_str(" disabled");
        }
    }
    out.push('\n');
}
