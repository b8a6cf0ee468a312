//! Player identity records as returned by the identity service.
//!
//! Fetching is left to the caller; these types only parse the JSON
//! documents and convert them into tab-list records.

use std::fmt;

use bytestream::Uuid;
use serde::{Deserialize, Serialize};

use crate::packets::{PlayerInfo, PlayerProperty};

/// Result type for profile parsing.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised while parsing identity records.
#[derive(Debug)]
pub enum ProfileError {
    /// The document was not the expected JSON shape.
    Json(serde_json::Error),
    /// The `id` field was not a UUID.
    InvalidUuid(uuid::Error),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid profile json: {e}"),
            Self::InvalidUuid(e) => write!(f, "invalid profile id: {e}"),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::InvalidUuid(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<uuid::Error> for ProfileError {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidUuid(err)
    }
}

/// Answer to a username lookup: `{"id": ..., "name": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameLookup {
    /// Undashed UUID.
    pub id: String,
    pub name: String,
}

impl UsernameLookup {
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn uuid(&self) -> ProfileResult<Uuid> {
        Ok(Uuid::parse_str(&self.id)?)
    }
}

/// One signed or unsigned property of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl From<ProfileProperty> for PlayerProperty {
    fn from(property: ProfileProperty) -> Self {
        Self {
            name: property.name,
            value: property.value,
            signature: property.signature,
        }
    }
}

/// A full profile: `{"id": ..., "name": ..., "properties": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Undashed UUID.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

impl PlayerProfile {
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn uuid(&self) -> ProfileResult<Uuid> {
        Ok(Uuid::parse_str(&self.id)?)
    }

    /// Builds the tab-list record announcing this player.
    pub fn into_player_info(self, gamemode: i32, ping: i32) -> ProfileResult<PlayerInfo> {
        let uuid = self.uuid()?;
        Ok(PlayerInfo {
            uuid,
            name: self.name,
            properties: self.properties.into_iter().map(PlayerProperty::from).collect(),
            gamemode,
            ping,
            display_name: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "id": "069a79f444e94726a5befca90e38aaf5",
        "name": "Notch",
        "properties": [
            {"name": "textures", "value": "eyJ0aW1lc3RhbXAiOjB9", "signature": "c2lnbmF0dXJl"},
            {"name": "unsigned", "value": "e30="}
        ]
    }"#;

    #[test]
    fn lookup_parses_undashed_id() {
        let lookup =
            UsernameLookup::from_json(r#"{"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch"}"#)
                .unwrap();
        assert_eq!(
            lookup.uuid().unwrap().hyphenated().to_string(),
            "069a79f4-44e9-4726-a5be-fca90e38aaf5"
        );
    }

    #[test]
    fn profile_properties_keep_optional_signature() {
        let profile = PlayerProfile::from_json(PROFILE).unwrap();
        assert_eq!(profile.properties.len(), 2);
        assert_eq!(profile.properties[0].signature.as_deref(), Some("c2lnbmF0dXJl"));
        assert_eq!(profile.properties[1].signature, None);
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let profile = PlayerProfile::from_json(r#"{"id":"00000000000000000000000000000001","name":"a"}"#)
            .unwrap();
        assert!(profile.properties.is_empty());
    }

    #[test]
    fn unsigned_property_serializes_without_signature() {
        let property = ProfileProperty {
            name: "n".to_string(),
            value: "v".to_string(),
            signature: None,
        };
        assert_eq!(
            serde_json::to_string(&property).unwrap(),
            r#"{"name":"n","value":"v"}"#
        );
    }

    #[test]
    fn into_player_info_converts_properties() {
        let info = PlayerProfile::from_json(PROFILE)
            .unwrap()
            .into_player_info(0, 50)
            .unwrap();
        assert_eq!(info.name, "Notch");
        assert_eq!(info.ping, 50);
        assert_eq!(info.properties[0].signature.as_deref(), Some("c2lnbmF0dXJl"));
        assert_eq!(info.properties[1].signature, None);
    }

    #[test]
    fn bad_id_is_reported() {
        let lookup = UsernameLookup {
            id: "not-a-uuid".to_string(),
            name: "x".to_string(),
        };
        assert!(matches!(lookup.uuid(), Err(ProfileError::InvalidUuid(_))));
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(
            PlayerProfile::from_json("{"),
            Err(ProfileError::Json(_))
        ));
    }
}
