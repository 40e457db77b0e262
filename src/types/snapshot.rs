use serde::{Deserialize, Deserializer, Serialize};

/// The pair of counts rendered at a point in time.
///
/// A snapshot is immutable; each successful refresh replaces the previous
/// one wholesale, there is no merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSnapshot {
    /// Operator-configured member total
    pub total: u64,
    /// Live count reported by the presence source
    pub online: u64,
}

impl PresenceSnapshot {
    pub fn new(total: u64, online: u64) -> Self {
        Self { total, online }
    }

    /// Snapshot rendered while the source is unavailable.
    pub fn fallback(total: u64) -> Self {
        Self { total, online: 0 }
    }
}

/// Lifecycle phase of the refresher.
///
/// `Loading` is only ever shown once; periodic ticks move between `Live`
/// and `Fallback`-era data but never re-enter the loading presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Uninitialized,
    /// Placeholder shown, first fetch in flight
    Loading,
    /// Counts reflect a successful fetch
    Live,
    /// First fetch failed, placeholder numbers shown
    Fallback,
}

/// Guild widget document as served by the widget endpoint.
///
/// Every field is optional on the wire; the server omits what the guild
/// has not enabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instant_invite: Option<String>,
    /// Live presence count; absent, null, or non-numeric values read as 0
    #[serde(default, deserialize_with = "count_or_zero")]
    pub presence_count: u64,
    #[serde(default)]
    pub members: Vec<WidgetMember>,
}

impl WidgetPayload {
    pub fn with_presence_count(count: u64) -> Self {
        Self {
            presence_count: count,
            ..Default::default()
        }
    }
}

/// One entry from the widget's public member list.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetMember {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

fn count_or_zero<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .or_else(|| value.as_f64().map(|count| count.max(0.0) as u64))
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_payload_full_document() {
        let body = r#"{
            "id": "1333341421691994124",
            "name": "Test Guild",
            "instant_invite": "https://discord.gg/abc",
            "presence_count": 37,
            "members": [
                {"id": "0", "username": "alice", "status": "online"},
                {"id": "1", "username": "bob", "status": "idle"}
            ]
        }"#;

        let payload: WidgetPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.presence_count, 37);
        assert_eq!(payload.name.as_deref(), Some("Test Guild"));
        assert_eq!(payload.instant_invite.as_deref(), Some("https://discord.gg/abc"));
        assert_eq!(payload.members.len(), 2);
        assert_eq!(payload.members[0].username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_missing_presence_count_reads_as_zero() {
        let payload: WidgetPayload = serde_json::from_str(r#"{"name": "Test Guild"}"#).unwrap();
        assert_eq!(payload.presence_count, 0);
    }

    #[test]
    fn test_non_numeric_presence_count_reads_as_zero() {
        for body in [
            r#"{"presence_count": "many"}"#,
            r#"{"presence_count": null}"#,
            r#"{"presence_count": -3}"#,
            r#"{"presence_count": {"nested": true}}"#,
        ] {
            let payload: WidgetPayload = serde_json::from_str(body).unwrap();
            assert_eq!(payload.presence_count, 0, "body: {}", body);
        }
    }

    #[test]
    fn test_fractional_presence_count_truncates() {
        let payload: WidgetPayload = serde_json::from_str(r#"{"presence_count": 37.9}"#).unwrap();
        assert_eq!(payload.presence_count, 37);
    }

    #[test]
    fn test_fallback_snapshot_zeroes_online() {
        let snapshot = PresenceSnapshot::fallback(484);
        assert_eq!(snapshot, PresenceSnapshot::new(484, 0));
    }
}
