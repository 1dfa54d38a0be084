//! Salary breakdown panel visibility.

/// Button label while the panel is hidden.
pub const SHOW_BREAKDOWN_LABEL: &str = "Show Salary Breakdown";

/// Button label while the panel is visible.
pub const HIDE_BREAKDOWN_LABEL: &str = "Hide Salary Breakdown";

/// The breakdown panel and the button that toggles it.
///
/// Starts hidden.
///
/// # Example
///
/// ```
/// use hr_document_engine::form::BreakdownPanel;
///
/// let mut panel = BreakdownPanel::new();
/// panel.toggle();
/// assert!(panel.is_visible());
/// assert_eq!(panel.button_label(), "Hide Salary Breakdown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakdownPanel {
    visible: bool,
}

impl BreakdownPanel {
    /// Creates a hidden panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The label the toggle button currently shows.
    pub fn button_label(&self) -> &'static str {
        if self.visible {
            HIDE_BREAKDOWN_LABEL
        } else {
            SHOW_BREAKDOWN_LABEL
        }
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}
