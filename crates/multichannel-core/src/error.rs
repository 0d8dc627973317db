use serde_json::{json, Value};
use thiserror::Error;

use crate::channel::ChannelId;

/// The one error kind this engine raises: a requested state transition
/// would violate a visibility or naming invariant.
///
/// Every variant carries a machine-stable reason code (see
/// [`reason_code`](Self::reason_code)) that callers map 1:1 to localized
/// messages; the code must never be downgraded to a generic one.
#[derive(Debug, Error)]
pub enum ChannelInheritanceError {
    #[error("Object '{object}' cannot disinherit its own channel {channel}")]
    DisinheritSelf { object: String, channel: ChannelId },

    #[error("Object '{object}' cannot be excluded: localized copy exists in channel {channel}")]
    ExcludeWithLocalization { object: String, channel: ChannelId },

    #[error("Object '{object}' cannot be excluded: '{obstruction}' is localized in channel {channel}")]
    ExcludeObstruction {
        object: String,
        obstruction: String,
        channel: ChannelId,
    },

    #[error("Object '{object}' cannot be reincluded: parent '{parent}' is excluded")]
    IncludeParentExcluded { object: String, parent: String },

    #[error("Channel {channel} cannot be disinherited for '{object}': a localized copy would be orphaned")]
    OrphanedLocalization { object: String, channel: ChannelId },

    #[error("Channel {channel} cannot be disinherited for '{object}': obstructed by localized '{obstruction}'")]
    ObstructedByLocalized {
        object: String,
        obstruction: String,
        channel: ChannelId,
    },

    #[error("Channel {channel} cannot be reinherited for '{object}': parent folder is not visible there")]
    ReinheritFolderInvisible { object: String, channel: ChannelId },

    #[error("Channel {channel} cannot be reinherited for '{object}': name collides with '{conflicting}'")]
    ReincludeNameCollision {
        object: String,
        conflicting: String,
        channel: ChannelId,
    },

    #[error("Localized copy of '{object}' cannot be created: master is excluded from multichannelling")]
    CreateMasterExcluded { object: String },

    #[error("Localized copy of '{object}' cannot be created in channel {channel}: channel is disinherited")]
    CreateChannelDisinherited { object: String, channel: ChannelId },

    #[error("Object '{object}' cannot be created: container '{container}' is excluded")]
    CreateContainerExcluded { object: String, container: String },

    #[error("Object '{object}' cannot be created in channel {channel}: container '{container}' disinherits it")]
    CreateContainerDisinherited {
        object: String,
        container: String,
        channel: ChannelId,
    },

    /// Collaborator failure (channel tree or candidate lookup); not part
    /// of the reason-code contract, the caller's transaction must abort.
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChannelInheritanceError>;

impl ChannelInheritanceError {
    /// Stable reason code, part of the contract with the API/i18n layer.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::DisinheritSelf { .. } => "disinherit.channel.self",
            Self::ExcludeWithLocalization { .. } => "disinherit.exclude.localization",
            Self::ExcludeObstruction { .. } => "disinherit.exclude.obstruction",
            Self::IncludeParentExcluded { .. } => "disinherit.include.parent.excluded",
            Self::OrphanedLocalization { .. } => "disinherit.orphaned.localization",
            Self::ObstructedByLocalized { .. } => "disinherit.obstructedby.localized",
            Self::ReinheritFolderInvisible { .. } => "reinherit.folder.invisible",
            Self::ReincludeNameCollision { .. } => "disinherit.reinclude.namecollision",
            Self::CreateMasterExcluded { .. } => "create.master.excluded",
            Self::CreateChannelDisinherited { .. } => "create.channel.disinherited",
            Self::CreateContainerExcluded { .. } => "create.container.excluded",
            Self::CreateContainerDisinherited { .. } => "create.container.disinherited",
            Self::Internal(_) | Self::Io(_) => "internal",
        }
    }

    /// Structured payload for the API layer: `{ code, params }`.
    pub fn violation(&self) -> Value {
        let params = match self {
            Self::DisinheritSelf { object, channel }
            | Self::OrphanedLocalization { object, channel }
            | Self::ReinheritFolderInvisible { object, channel }
            | Self::ExcludeWithLocalization { object, channel }
            | Self::CreateChannelDisinherited { object, channel } => {
                json!({ "object": object, "channel": channel })
            }
            Self::ExcludeObstruction {
                object,
                obstruction,
                channel,
            }
            | Self::ObstructedByLocalized {
                object,
                obstruction,
                channel,
            } => json!({ "object": object, "obstruction": obstruction, "channel": channel }),
            Self::IncludeParentExcluded { object, parent } => {
                json!({ "object": object, "parent": parent })
            }
            Self::ReincludeNameCollision {
                object,
                conflicting,
                channel,
            } => json!({ "object": object, "conflicting": conflicting, "channel": channel }),
            Self::CreateMasterExcluded { object } => json!({ "object": object }),
            Self::CreateContainerExcluded { object, container } => {
                json!({ "object": object, "container": container })
            }
            Self::CreateContainerDisinherited {
                object,
                container,
                channel,
            } => json!({ "object": object, "container": container, "channel": channel }),
            Self::Internal(message) => json!({ "message": message }),
            Self::Io(err) => json!({ "message": err.to_string() }),
        };
        json!({ "code": self.reason_code(), "params": params })
    }
}
