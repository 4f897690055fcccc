//! Name entry: two text fields collected before play starts.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use super::event::Edit;
use super::settings::SessionSettings;
use crate::games::tictactoe::{Direction, Player, Players};

/// Index of the last field; confirming it commits both names.
pub const LAST_FIELD: usize = 1;

/// Result of confirming the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Focus moved to the next field; nothing committed yet.
    Advance(NameEntry),
    /// Both names are final.
    Commit(Players),
}

/// Editable name fields for X (index 0) and O (index 1).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NameEntry {
    /// Current text of each field.
    fields: [String; 2],
    /// Shown in an empty field and used when it is committed empty.
    placeholders: [String; 2],
    /// Index of the focused field.
    focus: usize,
    /// Maximum number of characters per field.
    char_limit: usize,
}

impl NameEntry {
    /// Creates empty fields with focus on the first one.
    #[instrument]
    pub fn new(settings: &SessionSettings) -> Self {
        Self {
            fields: [String::new(), String::new()],
            placeholders: [
                settings.placeholder(Player::X).to_string(),
                settings.placeholder(Player::O).to_string(),
            ],
            focus: 0,
            char_limit: settings.name_char_limit,
        }
    }

    /// Player whose name the field at `index` holds.
    pub fn field_player(index: usize) -> Player {
        if index == 0 { Player::X } else { Player::O }
    }

    /// Moves focus up or down, clamped to the two fields.
    ///
    /// Left and right leave focus where it is.
    #[instrument(skip(self), fields(focus = self.focus))]
    pub fn navigate(mut self, direction: Direction) -> Self {
        self.focus = match direction {
            Direction::Up => self.focus.saturating_sub(1),
            Direction::Down => (self.focus + 1).min(LAST_FIELD),
            Direction::Left | Direction::Right => self.focus,
        };
        debug!(new_focus = self.focus, "Focus moved");
        self
    }

    /// Applies an edit to the focused field.
    ///
    /// Control characters and insertions past the character limit are
    /// dropped.
    #[instrument(skip(self), fields(focus = self.focus))]
    pub fn edit(mut self, edit: Edit) -> Self {
        let field = &mut self.fields[self.focus];
        match edit {
            Edit::Insert(c) if c.is_control() => {}
            Edit::Insert(c) => {
                if field.chars().count() < self.char_limit {
                    field.push(c);
                }
            }
            Edit::Backspace => {
                field.pop();
            }
        }
        self
    }

    /// Confirms the focused field.
    ///
    /// On the last field both names are committed, with blank fields
    /// falling back to their placeholder. Otherwise focus advances.
    #[instrument(skip(self), fields(focus = self.focus))]
    pub fn confirm(mut self) -> Confirmation {
        if self.focus < LAST_FIELD {
            self.focus += 1;
            return Confirmation::Advance(self);
        }

        let [x_field, o_field] = self.fields;
        let [x_placeholder, o_placeholder] = self.placeholders;
        let x_name = committed_name(x_field, x_placeholder);
        let o_name = committed_name(o_field, o_placeholder);
        info!(%x_name, %o_name, "Player names committed");
        Confirmation::Commit(Players::new(x_name, o_name))
    }
}

fn committed_name(text: String, placeholder: String) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed.to_string()
    }
}
