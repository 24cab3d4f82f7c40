//! Single-line numeric input that keeps the caret stable while the text is
//! re-formatted underneath it.
//!
//! The commit is two-phase. On the frame where the user types, the edited
//! text is normalized and the field's buffer is replaced with the canonical
//! rendering; the normalized caret position is only *stored*. On the next
//! frame — once the replaced text is what the widget actually shows — the
//! stored caret is written into the text-edit state before the widget runs.
//! Setting it in the same frame would position the caret against text the
//! widget has not displayed yet.

use egui::text::{CCursor, CCursorRange};
use egui::{Response, TextEdit, Ui};

use rent_core::{FieldFormat, Locale};

use crate::models::AmountField;

pub fn amount_edit(
    ui: &mut Ui,
    id_salt: &str,
    field: &mut AmountField,
    format: FieldFormat,
    locale: Locale,
    hint: &str,
    width: f32,
    has_error: bool,
) -> Response {
    let id = ui.make_persistent_id(id_salt);

    // Phase two: the buffer rewritten last frame is now on screen, so the
    // caret can be moved without the text shifting under it.
    if let Some(cursor) = field.pending_cursor.take() {
        if let Some(mut state) = TextEdit::load_state(ui.ctx(), id) {
            let index = cursor.min(field.buffer.chars().count());
            state
                .cursor
                .set_char_range(Some(CCursorRange::one(CCursor::new(index))));
            state.store(ui.ctx(), id);
        }
    }

    let mut edit = TextEdit::singleline(&mut field.buffer)
        .id(id)
        .hint_text(hint)
        .desired_width(width);
    if has_error {
        edit = edit.text_color(ui.visuals().error_fg_color);
    }
    let output = edit.show(ui);

    if output.response.changed() {
        // Phase one: normalize at the caret the user just moved, commit the
        // value, and leave the caret for the next frame.
        let cursor = output
            .state
            .cursor
            .char_range()
            .map(|range| range.primary.index)
            .unwrap_or_else(|| field.buffer.chars().count());
        field.apply_keystroke(cursor, format, locale);
    }

    if output.response.lost_focus() {
        field.touched = true;
    }

    output.response
}
