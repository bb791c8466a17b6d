//! Class names and attribute strings shared by the text field foundations
//! and the host bindings that render them.

/// CSS classes toggled on the root and its parts
pub mod css_classes {
    pub const ROOT: &str = "mdc-textfield";
    pub const UPGRADED: &str = "mdc-textfield--upgraded";
    pub const FOCUSED: &str = "mdc-textfield--focused";
    pub const INVALID: &str = "mdc-textfield--invalid";
    pub const DISABLED: &str = "mdc-textfield--disabled";
    /// Boxed variant; gets a ripple
    pub const BOX: &str = "mdc-textfield--box";
    /// Multi-line variant; has no bottom line
    pub const TEXTAREA: &str = "mdc-textfield--textarea";

    pub const INPUT: &str = "mdc-textfield__input";
    pub const LABEL: &str = "mdc-textfield__label";
    pub const TEXT_FIELD_ICON: &str = "mdc-textfield__icon";
    pub const BOTTOM_LINE: &str = "mdc-textfield__bottom-line";

    pub const LABEL_FLOAT_ABOVE: &str = "mdc-textfield__label--float-above";
    pub const LABEL_SHAKE: &str = "mdc-textfield__label--shake";
    pub const BOTTOM_LINE_ACTIVE: &str = "mdc-textfield__bottom-line--active";

    pub const HELPTEXT_PERSISTENT: &str = "mdc-textfield-helptext--persistent";
    pub const HELPTEXT_VALIDATION_MSG: &str = "mdc-textfield-helptext--validation-msg";
}

/// Attribute names, attribute values, and notification names
pub mod strings {
    pub const ARIA_HIDDEN: &str = "aria-hidden";
    pub const ARIA_CONTROLS: &str = "aria-controls";
    pub const ROLE: &str = "role";
    pub const TABINDEX: &str = "tabindex";
    pub const STYLE: &str = "style";

    pub const ROLE_ALERT: &str = "alert";

    pub const ICON_EVENT: &str = "MDCTextfield:icon";
    pub const FOCUS_EVENT: &str = "MDCTextfieldInput:focus";
    pub const BLUR_EVENT: &str = "MDCTextfieldInput:blur";
    pub const PRESSED_EVENT: &str = "MDCTextfieldInput:pressed";

    /// Only this transition ending can retire the bottom line
    pub const OPACITY_PROPERTY: &str = "opacity";
}
