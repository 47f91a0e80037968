//! Mock DOM
//!
//! A flat registry of elements keyed by id, plus the event history. Enough
//! of a page to observe everything the calculator renders: display text,
//! display classes, button labels and the highlighted operator.

use std::collections::HashMap;

use crate::keypad::Keypad;

/// Element id of the calculator display
pub const DISPLAY_ID: &str = "display";

/// `data-testid` carried by the calculator display
pub const DISPLAY_TEST_ID: &str = "calculator-display";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replaces the class list with a space-separated `className` string
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(String::from).collect();
    }

    /// The class list joined the way `className` reports it
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key down event on the document
    KeyDown {
        /// The key name, as `KeyboardEvent.key` reports it
        key: String,
        /// Whether the default action was suppressed
        default_prevented: bool,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str, default_prevented: bool) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            default_prevented,
        }
    }
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Registration order, for stable iteration
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: the display followed by one button per
    /// keypad entry
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_attr("data-testid", DISPLAY_TEST_ID)
                .with_class("display-text")
                .with_text("0"),
        );

        for btn in keypad.buttons() {
            let mut elem = DomElement::new("button")
                .with_id(btn.id())
                .with_text(&btn.action.label())
                .with_class("btn");
            if btn.is_operator() {
                elem.add_class("operator");
            }
            if btn.span > 1 {
                elem.add_class("wide");
            }
            dom.register_element(elem);
        }

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are ignored
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Finds the element carrying `data-testid="<test_id>"`
    #[must_use]
    pub fn get_by_test_id(&self, test_id: &str) -> Option<&DomElement> {
        self.elements()
            .find(|e| e.get_attr("data-testid") == Some(test_id))
    }

    /// All elements in registration order
    pub fn elements(&self) -> impl Iterator<Item = &DomElement> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// IDs of elements carrying `class`, in registration order
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<&str> {
        self.elements()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
