//! Keypad widget for the terminal
//!
//! Draws the shared [`Keypad`] layout as a grid of labelled buttons. The
//! pending operator is shown inverted and the last pressed button flashes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ClearLabel, Operator};
use crate::keypad::{KeypadAction, KeypadButtonDef, Keypad};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    active_operator: Option<Operator>,
    pressed: Option<KeypadAction>,
    clear_label: ClearLabel,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            active_operator: None,
            pressed: None,
            clear_label: ClearLabel::AllClear,
        }
    }

    /// Highlights an operator button
    #[must_use]
    pub fn with_active_operator(mut self, op: Option<Operator>) -> Self {
        self.active_operator = op;
        self
    }

    /// Flashes the button for an action
    #[must_use]
    pub fn with_pressed(mut self, action: Option<KeypadAction>) -> Self {
        self.pressed = action;
        self
    }

    /// Sets the clear button label
    #[must_use]
    pub fn with_clear_label(mut self, label: ClearLabel) -> Self {
        self.clear_label = label;
        self
    }

    fn label(&self, btn: &KeypadButtonDef) -> String {
        match btn.action {
            KeypadAction::Clear => self.clear_label.as_str().to_string(),
            action => action.label(),
        }
    }

    fn style(&self, btn: &KeypadButtonDef) -> Style {
        if self.pressed == Some(btn.action) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            KeypadAction::Operator(op) if self.active_operator == Some(op) => Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            KeypadAction::Operator(_) | KeypadAction::Equals => {
                Style::default().fg(Color::Yellow)
            }
            KeypadAction::Clear | KeypadAction::ToggleSign | KeypadAction::Percent => {
                Style::default().fg(Color::Gray)
            }
            _ => Style::default().fg(Color::White),
        }
    }
}

/// Inner grid cell size for a keypad drawn in `area`
fn cell_size(keypad: &Keypad, area: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    let rows = u16::try_from(rows).ok()?;
    let cols = u16::try_from(cols).ok()?;
    let width = area.width.saturating_sub(2) / cols;
    let height = area.height.saturating_sub(2) / rows;
    (width > 0 && height > 0).then_some((width, height))
}

/// Converts a click position inside `area` to the button under it
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<KeypadAction> {
    // Inside the border only
    if x <= area.x || y <= area.y {
        return None;
    }
    if x >= area.right().saturating_sub(1) || y >= area.bottom().saturating_sub(1) {
        return None;
    }

    let (btn_width, btn_height) = cell_size(keypad, area)?;
    let col = usize::from((x - area.x - 1) / btn_width);
    let row = usize::from((y - area.y - 1) / btn_height);
    keypad.get_button_at(row, col).map(|b| b.action)
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((btn_width, btn_height)) = cell_size(self.keypad, area) else {
            return; // Too small to render
        };
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        for btn in self.keypad.buttons() {
            let (Ok(row), Ok(col), Ok(span)) = (
                u16::try_from(btn.row),
                u16::try_from(btn.col),
                u16::try_from(btn.span),
            ) else {
                continue;
            };
            let width = btn_width * span;
            let x = inner.x + col * btn_width;
            let y = inner.y + row * btn_height + btn_height / 2;

            let label = format!("[{}]", self.label(btn));
            let label_len = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            let label_x = x + width.saturating_sub(label_len) / 2;

            if y < inner.bottom() && label_x < inner.right() {
                buf.set_span(label_x, y, &Span::styled(label, self.style(btn)), width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(widget: KeypadWidget<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn cell_style(widget: KeypadWidget<'_>, area: Rect, needle: &str) -> Style {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        for y in area.top()..area.bottom() {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect();
            if let Some(idx) = row.find(needle) {
                let col = u16::try_from(row[..idx].chars().count()).unwrap();
                return buf[(area.x + col + 1, y)].style();
            }
        }
        panic!("{needle} not rendered");
    }

    // ===== Rendering tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let content = render_to_string(KeypadWidget::new(&keypad), Rect::new(0, 0, 26, 12));
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[÷]"));
        assert!(content.contains("[AC]"));
        assert!(content.contains("[+/-]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        // Should not panic, just render border
        let content = render_to_string(KeypadWidget::new(&keypad), Rect::new(0, 0, 5, 5));
        assert!(!content.contains("[7]"));
    }

    #[test]
    fn test_keypad_widget_clear_label() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad).with_clear_label(ClearLabel::Clear);
        let content = render_to_string(widget, Rect::new(0, 0, 26, 12));
        assert!(content.contains("[C]"));
        assert!(!content.contains("[AC]"));
    }

    #[test]
    fn test_keypad_widget_active_operator_inverted() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        let widget = KeypadWidget::new(&keypad).with_active_operator(Some(Operator::Add));
        assert_eq!(cell_style(widget, area, "[+]").bg, Some(Color::White));

        let widget = KeypadWidget::new(&keypad).with_active_operator(Some(Operator::Add));
        assert_ne!(cell_style(widget, area, "[×]").bg, Some(Color::White));
    }

    #[test]
    fn test_keypad_widget_pressed_flash() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        let widget = KeypadWidget::new(&keypad).with_pressed(KeypadAction::digit(7).ok());
        assert_eq!(cell_style(widget, area, "[7]").bg, Some(Color::Yellow));
    }

    // ===== Hit test =====

    #[test]
    fn test_hit_test_inside() {
        let keypad = Keypad::new();
        // 24x10 inner grid: 6 wide, 2 high per cell
        let area = Rect::new(0, 0, 26, 12);
        assert_eq!(hit_test(&keypad, area, 1, 1), Some(KeypadAction::Clear));
        assert_eq!(
            hit_test(&keypad, area, 20, 1),
            Some(KeypadAction::Operator(Operator::Divide))
        );
        assert_eq!(hit_test(&keypad, area, 1, 3), KeypadAction::digit(7).ok());
    }

    #[test]
    fn test_hit_test_wide_zero() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 12);
        let zero = KeypadAction::digit(0).ok();
        assert_eq!(hit_test(&keypad, area, 1, 9), zero);
        assert_eq!(hit_test(&keypad, area, 8, 9), zero);
        assert_eq!(hit_test(&keypad, area, 14, 9), Some(KeypadAction::Decimal));
    }

    #[test]
    fn test_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(2, 2, 26, 12);
        assert_eq!(hit_test(&keypad, area, 0, 0), None);
        assert_eq!(hit_test(&keypad, area, 2, 5), None);
        assert_eq!(hit_test(&keypad, area, 27, 5), None);
        assert_eq!(hit_test(&keypad, area, 5, 13), None);
        assert_eq!(hit_test(&keypad, area, 40, 40), None);
    }

    #[test]
    fn test_hit_test_tiny_area() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, Rect::new(0, 0, 4, 4), 1, 1), None);
    }
}
