use crossterm::event::{KeyEvent, KeyEventKind};

use crate::ui::{ContactFormUI, FormAction};

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Submitted,
    Rejected(usize),
    /// The focused field wants the clipboard contents
    Paste,
}

pub struct EventHandler {
    should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    /// Route a key press to the form
    pub fn handle_key_event(&mut self, key: KeyEvent, ui: &mut ContactFormUI) -> EventResult {
        // Some terminals report releases and repeats as separate events
        if key.kind != KeyEventKind::Press {
            return EventResult::Continue;
        }

        match ui.handle_key(key) {
            FormAction::None => EventResult::Continue,
            FormAction::Submitted => EventResult::Submitted,
            FormAction::Rejected(count) => EventResult::Rejected(count),
            FormAction::PasteRequested => EventResult::Paste,
            FormAction::Quit => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
                EventResult::Continue
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_escape_sets_quit() {
        let mut handler = EventHandler::new();
        let mut ui = ContactFormUI::new();

        let result = handler.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()), &mut ui);
        assert_eq!(result, EventResult::Continue);
        assert!(handler.should_quit());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut handler = EventHandler::new();
        let mut ui = ContactFormUI::new();
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };

        handler.handle_key_event(release, &mut ui);
        assert_eq!(ui.form().value(crate::form::FormField::FirstName), "");
    }

    #[test]
    fn test_submit_result_is_forwarded() {
        let mut handler = EventHandler::new();
        let mut ui = ContactFormUI::new();
        let submit = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(handler.handle_key_event(submit, &mut ui), EventResult::Rejected(3));
        assert!(!handler.should_quit());
    }
}
