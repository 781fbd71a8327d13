//! Keyboard Input Handler
//!
//! Maps key presses to controller operations. Modal surfaces (locale picker,
//! search input) get the keys first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::DialogController;
use crate::logic::layout::Direction;

/// Handle keyboard input
pub fn handle_key(controller: &mut DialogController, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if controller.model.ui.locale_picker.is_some() {
        handle_locale_picker_key(controller, key);
        return;
    }

    if controller.model.ui.search_mode {
        handle_search_key(controller, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let vim = controller.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('c') if ctrl => controller.cancel(),
        KeyCode::Char('s') if ctrl => {
            controller.save();
        }
        KeyCode::Char('S') => {
            controller.save();
        }
        KeyCode::Char('f') if ctrl => controller.model.ui.search_mode = true,
        KeyCode::Char('/') => controller.model.ui.search_mode = true,
        KeyCode::Char('q') => controller.cancel(),
        KeyCode::Esc => {
            if controller.model.view.search().is_empty() {
                controller.cancel();
            } else {
                controller.clear_search();
            }
        }

        KeyCode::Left => controller.move_cursor(Direction::Left),
        KeyCode::Right => controller.move_cursor(Direction::Right),
        KeyCode::Up => controller.move_cursor(Direction::Up),
        KeyCode::Down => controller.move_cursor(Direction::Down),
        KeyCode::Char('h') if vim => controller.move_cursor(Direction::Left),
        KeyCode::Char('l') if vim => controller.move_cursor(Direction::Right),
        KeyCode::Char('k') if vim => controller.move_cursor(Direction::Up),
        KeyCode::Char('j') if vim => controller.move_cursor(Direction::Down),

        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(selected) = controller.toggle_at_cursor() {
                let count = controller.model.selection.len();
                let message = if selected {
                    format!("Selected ({} total)", count)
                } else {
                    format!("Deselected ({} total)", count)
                };
                controller.model.ui.show_toast(message);
            }
        }

        KeyCode::Char('L') => {
            controller.open_locale_picker();
        }

        KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => {
            controller.next_page();
        }
        KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => {
            controller.prev_page();
        }
        KeyCode::Char('d') if vim && ctrl => {
            controller.next_page();
        }
        KeyCode::Char('u') if vim && ctrl => {
            controller.prev_page();
        }
        KeyCode::Char('z') => {
            controller.cycle_page_size();
            let size = controller.model.view.page_size().get();
            controller.model.ui.show_toast(format!("{} per page", size));
        }

        KeyCode::Char('r') => {
            if controller.retry() {
                controller.model.ui.show_toast("Retrying...".to_string());
            }
        }

        _ => {}
    }
}

fn handle_search_key(controller: &mut DialogController, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc | KeyCode::Enter => controller.model.ui.search_mode = false,
        KeyCode::Backspace => controller.pop_search_char(),
        KeyCode::Char('u') if ctrl => controller.clear_search(),
        KeyCode::Char('c') if ctrl => controller.cancel(),
        KeyCode::Char('s') if ctrl => {
            controller.save();
        }
        KeyCode::Char(c) if !ctrl => controller.push_search_char(c),
        _ => {}
    }
}

fn handle_locale_picker_key(controller: &mut DialogController, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => controller.locale_picker_up(),
        KeyCode::Down | KeyCode::Char('j') => controller.locale_picker_down(),
        KeyCode::Enter => {
            if controller.confirm_locale_picker() {
                let name = controller.model.catalog.selected_locale_name().to_string();
                controller.model.ui.show_toast(format!("Locale: {}", name));
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => controller.close_locale_picker(),
        _ => {}
    }
}
