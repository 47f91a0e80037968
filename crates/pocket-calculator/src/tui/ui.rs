//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::SizeClass;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Area the keypad occupies inside a frame of `area`, for mouse hit tests
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    let [main, _help] = main_columns(area);
    let [_display, keypad] = main_rows(main);
    keypad
}

fn main_columns(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(26),    // Display + keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

fn main_rows(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(12),   // Keypad
        ])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the display, right-aligned like a pocket calculator
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let render = self.app.render();
        let style = match render.size_class {
            SizeClass::Normal => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            SizeClass::Small => Style::default().fg(Color::White),
            SizeClass::Smaller => Style::default().fg(Color::Gray),
        };

        let title = render
            .active_operator
            .map_or_else(|| " Display ".to_string(), |op| format!(" Display {op} "));

        Paragraph::new(Span::styled(render.display_text.as_str(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        let render = self.app.render();
        KeypadWidget::new(self.app.keypad())
            .with_active_operator(render.active_operator)
            .with_clear_label(render.clear_label)
            .with_pressed(self.app.last_pressed())
            .render(area, buf);
    }

    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [main, help] = main_columns(area);
        let [display, keypad] = main_rows(main);

        self.render_display(display, buf);
        self.render_keypad(keypad, buf);
        self.render_help_sidebar(help, buf);
    }
}

/// Window title
pub const TITLE: &str = " Pocket Calculator ";

/// Key help shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    (". ,", "Decimal"),
    ("+-*/", "Operators"),
    ("Enter", "Equals"),
    ("%", "Percent"),
    ("Bksp", "Delete"),
    ("Esc", "Clear"),
    ("q", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::KeypadAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 20);
        Terminal::new(backend).unwrap()
    }

    fn draw(app: &CalculatorApp) -> String {
        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn press_script(app: &mut CalculatorApp, script: &str) {
        for action in KeypadAction::parse_script(script).unwrap() {
            app.press(action);
        }
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_area_inside_frame() {
        let area = Rect::new(0, 0, 60, 20);
        let keypad = keypad_area(area);
        assert!(keypad.width >= 26);
        assert!(keypad.height >= 12);
        assert_eq!(keypad.y, 4);
    }

    // ===== Rendering tests =====

    #[test]
    fn test_render_initial() {
        let content = draw(&CalculatorApp::new());
        assert!(content.contains("Pocket Calculator"));
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("[AC]"));
    }

    #[test]
    fn test_render_display_text() {
        let mut app = CalculatorApp::new();
        press_script(&mut app, "1234567,5");
        let content = draw(&app);
        assert!(content.contains("1.234.567,5"));
        assert!(content.contains("[C]"));
    }

    #[test]
    fn test_render_pending_operator_in_title() {
        let mut app = CalculatorApp::new();
        press_script(&mut app, "8×");
        let content = draw(&app);
        assert!(content.contains("Display ×"));
    }

    #[test]
    fn test_render_help_sidebar() {
        let content = draw(&CalculatorApp::new());
        assert!(content.contains("Help"));
        for (key, _) in HELP_SHORTCUTS {
            assert!(content.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_render_small_terminal() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&CalculatorApp::new(), frame))
            .unwrap();
    }
}
