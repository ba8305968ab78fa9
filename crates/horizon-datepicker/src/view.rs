//! Descriptive view tree produced by the pickers.
//!
//! Pickers do not paint anything. [`Binder::render`](crate::Binder::render)
//! returns a [`MenuView`] describing the text field that activates the
//! overlay, the calendar inside it, and the elements rendered under the
//! calendar. A host toolkit maps these descriptions onto real widgets.

use std::fmt;
use std::sync::Arc;

use chrono::Weekday;

use crate::calendar::SelectionMode;
use crate::overlay::CloseHandle;

/// Icon appended to the picker's text field.
pub const CALENDAR_ICON: &str = "mdi-calendar";

/// Callback run when a button is clicked.
///
/// Receives the close capability of the picker the button is rendered in.
pub type Action = Arc<dyn Fn(&CloseHandle) + Send + Sync>;

/// Main-axis alignment of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// A clickable button.
#[derive(Clone)]
pub struct Button {
    label: String,
    color: Option<String>,
    on_click: Option<Action>,
}

impl Button {
    /// Create a button without an action.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: None,
            on_click: None,
        }
    }

    /// Set the color using builder pattern.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the click action using builder pattern.
    pub fn on_click<F>(mut self, action: F) -> Self
    where
        F: Fn(&CloseHandle) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(action));
        self
    }

    /// The button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The button color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Run the click action. Returns `false` if the button has none.
    pub fn click(&self, close: &CloseHandle) -> bool {
        match &self.on_click {
            Some(action) => {
                action(close);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("color", &self.color)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// A horizontal container.
#[derive(Debug, Clone, Default)]
pub struct Row {
    children: Vec<Element>,
    justify: Justify,
    style: String,
}

impl Row {
    /// Create a row holding `children`.
    pub fn new<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self {
            children: children.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the alignment using builder pattern.
    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Set the inline style using builder pattern.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    pub fn style(&self) -> &str {
        &self.style
    }
}

/// An element rendered under the calendar.
#[derive(Debug, Clone)]
pub enum Element {
    Row(Row),
    Button(Button),
    Text(String),
}

impl Element {
    /// All buttons in this element, depth first.
    pub fn buttons(&self) -> Vec<&Button> {
        match self {
            Self::Button(button) => vec![button],
            Self::Row(row) => row.children.iter().flat_map(Element::buttons).collect(),
            Self::Text(_) => Vec::new(),
        }
    }

    /// The first button labelled `label`.
    pub fn find_button(&self, label: &str) -> Option<&Button> {
        self.buttons().into_iter().find(|b| b.label() == label)
    }
}

impl From<Button> for Element {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Row> for Element {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The primary "close" button, right-aligned in a full-width row.
pub fn default_close_control() -> Element {
    Row::new([Button::new("close")
        .with_color("primary")
        .on_click(|close: &CloseHandle| {
            close.close();
        })])
    .with_justify(Justify::End)
    .with_style("width: 100%")
    .into()
}

/// The text field that activates the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub label: String,
    pub value: String,
    pub read_only: bool,
    pub append_icon: &'static str,
    pub style: String,
}

/// The calendar shown inside the overlay.
#[derive(Debug, Clone)]
pub struct CalendarView {
    pub mode: SelectionMode,
    /// Selected dates in the wire pattern.
    pub value: Vec<String>,
    pub first_day_of_week: Weekday,
    /// Displayed (year, month).
    pub displayed_month: (i32, u32),
    pub style: Option<String>,
    pub children: Vec<Element>,
}

/// A popup anchored to its activator.
#[derive(Debug, Clone)]
pub struct MenuView {
    pub activator: TextFieldView,
    pub content: CalendarView,
    pub open: bool,
    /// Always `false`: picking a date must not dismiss the overlay.
    pub close_on_content_click: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{OpenFlag, OverlayState};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_close_control_closes() {
        let overlay = OverlayState::adopt(OpenFlag::Fixed(true));
        let control = default_close_control();

        let Element::Row(row) = &control else {
            panic!("expected a row");
        };
        assert_eq!(row.justify(), Justify::End);
        assert_eq!(row.children().len(), 1);

        let button = control.find_button("close").unwrap();
        assert_eq!(button.color(), Some("primary"));
        assert!(button.click(&overlay.close_handle()));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_button_without_action() {
        let overlay = OverlayState::adopt(OpenFlag::Fixed(true));
        assert!(!Button::new("noop").click(&overlay.close_handle()));
        assert!(overlay.is_open());
    }

    #[test]
    fn test_nested_buttons_in_order() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let tree: Element = Row::new([
            Element::from("Pick a stay"),
            Button::new("Book")
                .on_click(move |_| {
                    count_clone.fetch_add(1, Ordering::SeqCst);
                })
                .into(),
            Row::new([Button::new("Cancel")]).into(),
        ])
        .into();

        let labels: Vec<&str> = tree.buttons().into_iter().map(Button::label).collect();
        assert_eq!(labels, vec!["Book", "Cancel"]);

        let overlay = OverlayState::adopt(OpenFlag::default());
        tree.find_button("Book").unwrap().click(&overlay.close_handle());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
