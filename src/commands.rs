// Collaborator entry points
// What the search box and the buttons call. Nothing here returns an error:
// a bad clip becomes a notification, never a crash.

use serde::Serialize;

use crate::audio::{ChannelId, ChannelState};
use crate::query::{BoardEntry, BoardView};
use crate::state::Soundboard;

/// Non-fatal result of a button press, shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Notification {
    Playing {
        key: String,
        channel: Option<ChannelId>,
    },
    Failed {
        key: String,
        message: String,
    },
}

impl Notification {
    pub fn is_failure(&self) -> bool {
        matches!(self, Notification::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardStatusResponse {
    pub query: String,
    pub entries: Vec<BoardEntry>,
    pub channels: Vec<ChannelState>,
}

/// Search text changed: rebuild the visible board
pub fn on_query_changed(board: &Soundboard, text: &str) -> BoardView {
    board.set_query(text)
}

/// A button was pressed
pub async fn on_activate(board: &Soundboard, key: &str) -> Notification {
    match board.activate(key).await {
        Ok(outcome) => Notification::Playing {
            key: key.to_string(),
            channel: outcome.channel(),
        },
        Err(e) => {
            log::error!("[Board] Failed to play {:?}: {}", key, e);
            Notification::Failed {
                key: key.to_string(),
                message: e.to_string(),
            }
        }
    }
}

pub fn stop_all(board: &Soundboard) -> Result<(), String> {
    board
        .engine()
        .stop_all()
        .map_err(|e| format!("Failed to stop playback: {}", e))
}

pub fn get_board_status(board: &Soundboard) -> BoardStatusResponse {
    let view = board.view();
    BoardStatusResponse {
        query: view.query,
        entries: view.entries,
        channels: board.engine().channel_states(),
    }
}
