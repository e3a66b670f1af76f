use crate::domain::ports::ConfirmPrompt;

pub const DEFAULT_DELETE_MESSAGE: &str = "Êtes-vous sûr de vouloir supprimer cet élément ?";

/// Asks before a destructive action. A missing or empty message falls back
/// to [`DEFAULT_DELETE_MESSAGE`].
pub fn confirm_delete<P: ConfirmPrompt + ?Sized>(prompt: &P, message: Option<&str>) -> bool {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_DELETE_MESSAGE);
    prompt.confirm(message)
}
