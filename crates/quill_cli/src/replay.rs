//! Scenario replay

use anyhow::{Context, Result};
use quill_core::KeyCode;
use quill_dom::{Document, SharedDocument, TextField, TextFieldElements};
use std::cell::RefCell;
use std::rc::Rc;

use crate::report::{Report, StepRecord};
use crate::scenario::{Scenario, Step};

/// Build the scenario's field, run its steps, and report the result
pub fn replay(scenario: &Scenario, name: &str) -> Result<Report> {
    let doc: SharedDocument = Rc::new(RefCell::new(Document::new()));
    let elements = scenario.field.build(&mut doc.borrow_mut());

    let mut field = Some(
        TextField::attach_with(&doc, elements.root, &scenario.options, None)
            .context("Failed to attach text field")?,
    );
    let mut records = Vec::with_capacity(scenario.steps.len());

    for (index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(index, action = step.name(), "replaying step");
        run_step(&doc, &elements, &mut field, step)
            .with_context(|| format!("Step {} ({}) failed", index + 1, step.name()))?;

        records.push(StepRecord {
            index: index + 1,
            action: step.name(),
            state: field.as_ref().map(|field| format!("{:?}", field.state())),
            emitted: doc
                .borrow_mut()
                .take_emitted()
                .into_iter()
                .map(|emitted| emitted.name)
                .collect(),
        });
    }

    let report = Report::capture(name, &doc.borrow(), &elements, field.as_ref(), records);
    Ok(report)
}

fn run_step(
    doc: &SharedDocument,
    elements: &TextFieldElements,
    field: &mut Option<TextField>,
    step: &Step,
) -> Result<()> {
    if let Step::SetValue { value } = step {
        doc.borrow_mut().set_value(elements.input, value);
        return Ok(());
    }

    let Some(active) = field.as_mut() else {
        anyhow::bail!("The text field was already destroyed");
    };

    match step {
        Step::Focus => active.focus(),
        Step::Blur => active.blur(),
        Step::Input { value } => active.input(value),
        Step::Press { x } => active.press(*x),
        Step::ClickIcon => active.click(icon(elements)?),
        Step::EnterIcon => active.key_down(icon(elements)?, "Enter", KeyCode::ENTER),
        Step::SetValid { valid } => active.set_valid(*valid),
        Step::SetDisabled { disabled } => active.set_disabled(*disabled),
        Step::TransitionEnd { property } => active.transition_end(property),
        Step::Destroy => {
            if let Some(field) = field.take() {
                field.destroy();
            }
        }
        Step::SetValue { .. } => {}
    }
    Ok(())
}

fn icon(elements: &TextFieldElements) -> Result<quill_dom::ElementId> {
    elements
        .icon
        .context("The field has no icon; set `icon = true` under [field]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_textfield::css_classes;

    fn run(content: &str) -> Report {
        let scenario = Scenario::parse(content).unwrap();
        replay(&scenario, "test").unwrap()
    }

    #[test]
    fn test_replay_focus_blur() {
        let report = run(
            r#"
            [field]
            required = true

            [[step]]
            action = "focus"

            [[step]]
            action = "blur"
            "#,
        );

        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].state.as_deref(), Some("Focused"));
        assert_eq!(report.steps[1].state.as_deref(), Some("UnfocusedInvalid"));
        assert!(report.root.classes.iter().any(|c| c == css_classes::INVALID));
    }

    #[test]
    fn test_replay_records_notifications_per_step() {
        let report = run(
            r#"
            [field]
            icon = true

            [[step]]
            action = "click_icon"

            [[step]]
            action = "enter_icon"

            [[step]]
            action = "set_disabled"
            disabled = true

            [[step]]
            action = "click_icon"
            "#,
        );

        assert_eq!(report.steps[0].emitted, vec!["MDCTextfield:icon"]);
        assert_eq!(report.steps[1].emitted, vec!["MDCTextfield:icon"]);
        assert!(report.steps[3].emitted.is_empty());
    }

    #[test]
    fn test_replay_destroy_releases_listeners() {
        let report = run(
            r#"
            [[step]]
            action = "focus"

            [[step]]
            action = "destroy"

            [[step]]
            action = "set_value"
            value = "after"
            "#,
        );

        assert_eq!(report.listeners, 0);
        assert!(report.destroyed);
        assert_eq!(report.steps[1].state, None);
    }

    #[test]
    fn test_steps_after_destroy_fail() {
        let scenario = Scenario::parse(
            r#"
            [[step]]
            action = "destroy"

            [[step]]
            action = "focus"
            "#,
        )
        .unwrap();

        let error = replay(&scenario, "test").unwrap_err();
        assert!(format!("{error:#}").contains("already destroyed"));
    }

    #[test]
    fn test_icon_step_without_icon_fails() {
        let scenario = Scenario::parse(
            r#"
            [[step]]
            action = "click_icon"
            "#,
        )
        .unwrap();
        assert!(replay(&scenario, "test").is_err());
    }

    #[test]
    fn test_bundled_scenarios_replay() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
        let mut count = 0;
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                let scenario = Scenario::load(&path).unwrap();
                let name = scenario.display_name(&path);
                replay(&scenario, &name).unwrap();
                count += 1;
            }
        }
        assert!(count > 0);
    }
}
