use crate::types::{PresenceError, Result, WidgetPayload};

/// Invite link for the community, copyable to the system clipboard.
///
/// Operators configure a permanent invite URL at build time;
/// [`from_widget`](Self::from_widget) prefers the `instant_invite` the
/// widget document carries when the server publishes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteLink {
    url: String,
}

impl InviteLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Invite carried by the widget document, falling back to `configured`.
    pub fn from_widget(payload: &WidgetPayload, configured: &str) -> Self {
        match payload.instant_invite.as_deref() {
            Some(invite) if !invite.is_empty() => Self::new(invite),
            _ => Self::new(configured),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Copies the invite URL to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`PresenceError::Clipboard`] when no clipboard is available
    /// (e.g. headless sessions) or the write is rejected.
    pub fn copy_to_clipboard(&self) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| PresenceError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(self.url.clone())
            .map_err(|e| PresenceError::Clipboard(e.to_string()))?;
        tracing::debug!("copied invite link to clipboard: {}", self.url);
        Ok(())
    }
}

impl std::fmt::Display for InviteLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGURED: &str = "https://discord.gg/pzjazBzxvG";

    #[test]
    fn test_from_widget_prefers_instant_invite() {
        let payload = WidgetPayload {
            instant_invite: Some("https://discord.gg/abc".to_string()),
            ..Default::default()
        };
        let invite = InviteLink::from_widget(&payload, CONFIGURED);
        assert_eq!(invite.url(), "https://discord.gg/abc");
    }

    #[test]
    fn test_from_widget_falls_back_to_configured() {
        let invite = InviteLink::from_widget(&WidgetPayload::default(), CONFIGURED);
        assert_eq!(invite.url(), CONFIGURED);

        let payload = WidgetPayload {
            instant_invite: Some(String::new()),
            ..Default::default()
        };
        let invite = InviteLink::from_widget(&payload, CONFIGURED);
        assert_eq!(invite.url(), CONFIGURED);
    }

    #[test]
    fn test_display_is_the_url() {
        assert_eq!(InviteLink::new(CONFIGURED).to_string(), CONFIGURED);
    }
}
