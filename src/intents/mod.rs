//! Chat participant -> usage mode classification for analytics.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Namespace prefix carried by fully-qualified participant ids.
pub const PARTICIPANT_NAMESPACE: &str = "github.copilot.";

pub const DEFAULT_AGENT: &str = "default";
pub const WORKSPACE_AGENT: &str = "workspace";
pub const VSCODE_AGENT: &str = "vscode";
pub const TERMINAL_PANEL_AGENT: &str = "terminalPanel";
pub const EDITS_AGENT: &str = "edits";
pub const EDITS_AGENT_LEGACY: &str = "editsAgent";
pub const EDITING_SESSION_AGENT: &str = "editingSession";
pub const EDITING_SESSION_AGENT_2: &str = "editingSession2";
pub const EDITOR_AGENT: &str = "editor";
pub const TERMINAL_AGENT: &str = "terminal";

/// Closed set of analytics mode labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModeLabel {
    Ask,
    Agent,
    Edit,
    Inline,
}

/// Short participant name, with the namespace prefix removed if present.
pub fn participant_name(participant_id: &str) -> &str {
    participant_id
        .strip_prefix(PARTICIPANT_NAMESPACE)
        .unwrap_or(participant_id)
}

/// Map a participant identity to its mode label.
///
/// Total: unknown identities, including editor- and terminal-scoped ones,
/// land on [`ModeLabel::Inline`].
pub fn classify(participant_id: &str) -> ModeLabel {
    match participant_name(participant_id) {
        DEFAULT_AGENT | WORKSPACE_AGENT | VSCODE_AGENT | TERMINAL_PANEL_AGENT => ModeLabel::Ask,
        EDITS_AGENT | EDITS_AGENT_LEGACY => ModeLabel::Agent,
        EDITING_SESSION_AGENT | EDITING_SESSION_AGENT_2 => ModeLabel::Edit,
        _ => ModeLabel::Inline,
    }
}
