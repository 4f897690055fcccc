//! Session settings: defaults applied at start-up and on hard reset.

use tracing::instrument;

use crate::games::tictactoe::{Player, Players};

/// Default character limit for a player name.
pub const DEFAULT_NAME_CHAR_LIMIT: usize = 32;

/// Values a session falls back to when the players leave something unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Name used for X when the field is left empty.
    pub player_x_placeholder: String,
    /// Name used for O when the field is left empty.
    pub player_o_placeholder: String,
    /// Maximum number of characters in a name field.
    pub name_char_limit: usize,
}

impl SessionSettings {
    /// Creates a new `SessionSettings` with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder name for `player`.
    pub fn placeholder(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_placeholder,
            Player::O => &self.player_o_placeholder,
        }
    }

    /// Roster made of the placeholder names.
    pub fn default_players(&self) -> Players {
        Players::new(
            self.player_x_placeholder.clone(),
            self.player_o_placeholder.clone(),
        )
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            player_x_placeholder: "Player X".to_string(),
            player_o_placeholder: "Player O".to_string(),
            name_char_limit: DEFAULT_NAME_CHAR_LIMIT,
        }
    }
}
