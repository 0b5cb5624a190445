//! Interaction state to inline style mapping.
//!
//! Styles are layered: the idle base, then the active overrides for any drag
//! over the target, then the rejection tint.

use crate::types::DragInteractionState;

const BASE_BORDER_WIDTH: &str = "1px";
const BASE_BORDER_COLOR: &str = "#ffffff";
const ACTIVE_BORDER_WIDTH: &str = "2px";
const ACTIVE_BORDER_COLOR: &str = "#777777";
const REJECT_BACKGROUND: &str = "#ffdddd";

/// Inline style of the drop target root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropzoneStyle {
    pub flex: &'static str,
    pub border_width: &'static str,
    pub border_style: &'static str,
    pub border_color: &'static str,
    pub background_color: Option<&'static str>,
}

impl Default for DropzoneStyle {
    fn default() -> Self {
        Self {
            flex: "1",
            border_width: BASE_BORDER_WIDTH,
            border_style: "dashed",
            border_color: BASE_BORDER_COLOR,
            background_color: None,
        }
    }
}

impl DropzoneStyle {
    pub fn for_state(state: DragInteractionState) -> Self {
        let mut style = Self::default();
        if state.is_active() {
            style.border_width = ACTIVE_BORDER_WIDTH;
            style.border_color = ACTIVE_BORDER_COLOR;
        }
        if state.is_reject() {
            style.background_color = Some(REJECT_BACKGROUND);
        }
        style
    }

    /// Render as a `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "flex: {}; border-width: {}; border-style: {}; border-color: {};",
            self.flex, self.border_width, self.border_style, self.border_color
        );
        if let Some(background) = self.background_color {
            css.push_str(&format!(" background-color: {};", background));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_style() {
        let style = DropzoneStyle::for_state(DragInteractionState::Idle);
        assert_eq!(style, DropzoneStyle::default());
        assert_eq!(
            style.to_css(),
            "flex: 1; border-width: 1px; border-style: dashed; border-color: #ffffff;"
        );
    }

    #[test]
    fn test_active_styles() {
        for state in [DragInteractionState::Active, DragInteractionState::AcceptPending] {
            let style = DropzoneStyle::for_state(state);
            assert_eq!(style.border_width, "2px");
            assert_eq!(style.border_color, "#777777");
            assert_eq!(style.border_style, "dashed");
            assert_eq!(style.background_color, None);
        }
    }

    #[test]
    fn test_reject_style() {
        let style = DropzoneStyle::for_state(DragInteractionState::RejectPending);
        assert_eq!(style.border_width, "2px");
        assert_eq!(style.background_color, Some("#ffdddd"));
        assert!(style.to_css().ends_with("background-color: #ffdddd;"));
    }
}
