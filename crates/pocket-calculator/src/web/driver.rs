//! DOM Driver
//!
//! Routes mock-DOM events into the engine and writes each render back into
//! the page, the way a browser event listener would.

use tracing::debug;

use super::dom::{DomEvent, MockDom, DISPLAY_ID};
use crate::config::DisplayConfig;
use crate::core::{CalcResult, Calculator, ClearLabel, Operator, Render};
use crate::driver::CalculatorDriver;
use crate::keypad::{KeypadAction, Keypad};

/// Class marking the highlighted operator button
const ACTIVE_CLASS: &str = "active";

/// Calculator page driven through mock DOM events
#[derive(Debug)]
pub struct DomDriver {
    calculator: Calculator,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a page with the default display settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Creates a page with custom display settings
    #[must_use]
    pub fn with_config(config: DisplayConfig) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        let mut driver = Self {
            calculator: Calculator::with_config(config),
            keypad,
            dom,
        };
        let render = driver.calculator.render();
        driver.sync_dom(&render);
        driver
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a reference to the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Simulates clicking the element with `element_id`
    pub fn click(&mut self, element_id: &str) -> CalcResult<Render> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let action = self.keypad.handle_click(element_id)?;
        Ok(self.perform(action))
    }

    /// Simulates a document-level key press.
    ///
    /// Returns whether the default action was suppressed, which happens
    /// exactly when the key maps to a calculator action.
    pub fn key_down(&mut self, key: &str) -> bool {
        let action = KeypadAction::from_key(key);
        self.dom
            .dispatch_event(DomEvent::key_down(key, action.is_some()));

        match action {
            Some(action) => {
                self.perform(action);
                true
            }
            None => {
                debug!(key, "key ignored");
                false
            }
        }
    }

    /// Text currently shown by the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Class list currently on the display element
    #[must_use]
    pub fn display_class(&self) -> String {
        self.dom
            .get_element(DISPLAY_ID)
            .map(|e| e.class_name())
            .unwrap_or_default()
    }

    /// Label currently shown on the clear button
    #[must_use]
    pub fn clear_button_text(&self) -> &str {
        self.dom
            .get_element_text(KeypadAction::Clear.element_id())
            .unwrap_or_default()
    }

    /// IDs of the buttons currently carrying the `active` class
    #[must_use]
    pub fn highlighted_buttons(&self) -> Vec<&str> {
        self.dom.ids_with_class(ACTIVE_CLASS)
    }

    fn perform(&mut self, action: KeypadAction) -> Render {
        let render = action.apply(&mut self.calculator);
        self.sync_dom(&render);
        render
    }

    /// Writes a render into the page
    fn sync_dom(&mut self, render: &Render) {
        if let Some(display) = self.dom.get_element_mut(DISPLAY_ID) {
            display.set_text(&render.display_text);
            display.set_class_name(render.size_class.css_class());
        }

        self.dom.set_element_text(
            KeypadAction::Clear.element_id(),
            render.clear_label.as_str(),
        );

        for op in Operator::ALL {
            if let Some(button) = self.dom.get_element_mut(op.element_id()) {
                if render.active_operator == Some(op) {
                    button.add_class(ACTIVE_CLASS);
                } else {
                    button.remove_class(ACTIVE_CLASS);
                }
            }
        }
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, action: KeypadAction) -> CalcResult<()> {
        match self.keypad.find_button_by_action(action) {
            Some(button) => {
                let id = button.id();
                self.click(id)?;
            }
            // Keyboard-only actions
            None => {
                self.perform(action);
            }
        }
        Ok(())
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn clear_label(&self) -> ClearLabel {
        match self.clear_button_text() {
            "AC" => ClearLabel::AllClear,
            _ => ClearLabel::Clear,
        }
    }

    fn active_operator(&self) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| self.highlighted_buttons().contains(&op.element_id()))
    }

    fn clear(&mut self) {
        self.perform(KeypadAction::Clear);
    }
}
