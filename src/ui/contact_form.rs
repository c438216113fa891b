use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::form::{ContactForm, FormField, SubmitOutcome};
use crate::theme::Theme;
use crate::ui::view::{ContactFormView, FORM_HEADER, SUBMIT_LABEL};

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    SubmitButton,
}

impl Focus {
    fn next(&self) -> Self {
        match self {
            Focus::Field(FormField::Message) => Focus::SubmitButton,
            Focus::Field(field) => Focus::Field(field.next()),
            Focus::SubmitButton => Focus::Field(FormField::FirstName),
        }
    }

    fn previous(&self) -> Self {
        match self {
            Focus::Field(FormField::FirstName) => Focus::SubmitButton,
            Focus::Field(field) => Focus::Field(field.previous()),
            Focus::SubmitButton => Focus::Field(FormField::Message),
        }
    }
}

/// Actions reported back to the application loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submitted,
    Rejected(usize),
    PasteRequested,
    Quit,
}

/// Terminal contact form
pub struct ContactFormUI {
    form: ContactForm,
    focus: Focus,
    status: Option<String>,
}

impl ContactFormUI {
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            focus: Focus::Field(FormField::FirstName),
            status: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.focus = Focus::Field(field);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn view(&self) -> ContactFormView {
        ContactFormView::build(&self.form)
    }

    /// Type a string into the given field one keystroke at a time
    pub fn type_text(&mut self, field: FormField, text: &str) {
        self.focus_field(field);
        for c in text.chars() {
            self.form.push_char(field, c);
        }
    }

    /// Insert clipboard text into the focused field
    pub fn paste(&mut self, text: &str) {
        let Focus::Field(field) = self.focus else {
            return;
        };

        if field == FormField::Message {
            self.form.push_str(field, text);
        } else {
            let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            self.form.push_str(field, &single_line);
        }
    }

    pub fn submit(&mut self) -> FormAction {
        match self.form.submit() {
            SubmitOutcome::Accepted(_) => {
                self.status = Some("Form submitted".to_string());
                FormAction::Submitted
            }
            SubmitOutcome::Rejected { error_count } => {
                self.status = Some(format!("{} field(s) need attention", error_count));
                if let Some((field, _)) = self.form.errors().iter().next() {
                    self.focus = Focus::Field(field);
                }
                FormAction::Rejected(error_count)
            }
        }
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.focus = Focus::Field(FormField::FirstName);
        self.status = Some("Form cleared".to_string());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => {
                    self.reset();
                    FormAction::None
                }
                KeyCode::Char('v') => FormAction::PasteRequested,
                KeyCode::Char('c') => FormAction::Quit,
                _ => FormAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => return FormAction::Quit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => match self.focus {
                Focus::SubmitButton => return self.submit(),
                Focus::Field(FormField::Message) => self.form.push_char(FormField::Message, '\n'),
                Focus::Field(_) => self.focus = self.focus.next(),
            },
            KeyCode::Backspace => {
                if let Focus::Field(field) = self.focus {
                    self.form.pop_char(field);
                }
            }
            KeyCode::Char(c) => match self.focus {
                Focus::Field(field) => self.form.push_char(field, c),
                Focus::SubmitButton if c == ' ' => return self.submit(),
                Focus::SubmitButton => {}
            },
            _ => {}
        }

        FormAction::None
    }

    /// Render the contact form
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let view = self.view();
        let palette = &theme.colors.palette;

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Form and submitted values
                Constraint::Length(3), // Status
            ])
            .split(area);

        let header = Paragraph::new(FORM_HEADER)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
            .style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(header, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        self.render_inputs(frame, columns[0], &view, theme);
        self.render_display(frame, columns[1], &view, theme);
        self.render_status(frame, chunks[2], theme);
    }

    fn render_inputs(&self, frame: &mut Frame, area: Rect, view: &ContactFormView, theme: &Theme) {
        let colors = &theme.colors;

        let mut constraints = Vec::new();
        for _ in &view.inputs {
            constraints.push(Constraint::Length(3)); // Input
            constraints.push(Constraint::Length(1)); // Error line
        }
        constraints.push(Constraint::Length(3)); // Submit button
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, input) in view.inputs.iter().enumerate() {
            let input_area = chunks[i * 2];
            let error_area = chunks[i * 2 + 1];
            let is_focused = self.focus == Focus::Field(input.field);

            let border_style = if input.error.is_some() {
                Style::default().fg(colors.palette.error)
            } else if is_focused {
                Style::default().fg(colors.palette.border_focused)
            } else {
                Style::default().fg(colors.palette.border)
            };

            let title = if input.field.is_required() {
                format!("{} *", input.label)
            } else {
                input.label.to_string()
            };

            // Show the tail of multi-line messages on the single input row
            let shown = input.value.lines().last().unwrap_or("");
            let block = Block::default()
                .title(Span::styled(title, Style::default().fg(colors.form.label)))
                .borders(Borders::ALL)
                .border_style(border_style);
            let paragraph = Paragraph::new(shown.to_string())
                .block(block)
                .style(Style::default().fg(colors.form.input));
            frame.render_widget(paragraph, input_area);

            if is_focused {
                let width = shown.chars().count() as u16;
                let x = (input_area.x + 1 + width).min(input_area.right().saturating_sub(2));
                frame.set_cursor(x, input_area.y + 1);
            }

            if let Some(error) = &input.error {
                let error_line = Paragraph::new(error.text.as_str())
                    .style(Style::default().fg(colors.form.error_text));
                frame.render_widget(error_line, error_area);
            }
        }

        let button_area = chunks[view.inputs.len() * 2];
        let button_focused = self.focus == Focus::SubmitButton;
        let button_style = if button_focused {
            Style::default()
                .fg(colors.form.button_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.form.button)
        };
        let button = Paragraph::new(format!("[ {} ]", SUBMIT_LABEL))
            .block(Block::default().borders(Borders::ALL).border_style(button_style))
            .style(button_style);
        frame.render_widget(button, button_area);
    }

    fn render_display(&self, frame: &mut Frame, area: Rect, view: &ContactFormView, theme: &Theme) {
        let colors = &theme.colors;

        let lines: Vec<Line> = view
            .display
            .iter()
            .map(|region| match region.text.split_once(": ") {
                Some((label, value)) => Line::from(vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(colors.form.display_label)),
                    Span::styled(value.to_string(), Style::default().fg(colors.form.display_value)),
                ]),
                None => Line::from(region.text.clone()),
            })
            .collect();

        let block = Block::default()
            .title("Submitted")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.palette.border));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let hints = "Tab/Shift+Tab: Navigate | Enter on Submit or Ctrl+S: Submit | Ctrl+R: Clear | Esc: Quit";
        let text = match &self.status {
            Some(status) => format!("{} | {}", status, hints),
            None => hints.to_string(),
        };

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(theme.colors.palette.text_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Default for ContactFormUI {
    fn default() -> Self {
        Self::new()
    }
}
