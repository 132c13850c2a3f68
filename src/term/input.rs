use crossterm::event::Event as CtEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use game_of_life::Pixel;
use game_of_life::intent::Intent;

use super::BLOCK_SIZE;
use super::ROW_PIXELS;

/// Converts a crossterm event into an intent, if it maps to one
pub fn convert_event(event: CtEvent) -> Option<Intent> {
    match event {
        CtEvent::Key(key_event) => convert_key(key_event),
        CtEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Intent::ToggleCellAtPixel {
            x: column as Pixel,
            y: row as Pixel * ROW_PIXELS,
        }),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Intent> {
    // Some platforms report releases as well
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Intent::Quit),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Intent::TogglePause),
        KeyEvent {
            code: KeyCode::Esc, ..
        } => Some(Intent::ClearGrid),
        _ => None,
    }
}

/// Whether an intent only touches cells on screen. `visible` is the `(width, height)` of the
/// drawn part of the grid, see [`super::render::visible`]. Clicks outside of it, on the status
/// line or a clipped edge, would edit cells the user cannot see.
pub fn is_drawn(intent: &Intent, visible: (usize, usize)) -> bool {
    let Intent::ToggleCellAtPixel { x, y } = *intent else {
        return true;
    };

    let (w, h) = visible;

    ((x / BLOCK_SIZE) as usize) < w && ((y / BLOCK_SIZE) as usize) < h
}
