use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common_enums::{ActivityAction, ActivityType, CocType, PerformerType};
use crate::models::identifiable::Identifiable;

/// # Documentation
/// ActivityLogModel is an immutable audit entry describing one action taken
/// against a customer or company. Entries are created once and never updated
/// or deleted.
///
/// The persisted row flattens three embedded groups into column prefixes:
/// - `activity_*`: what happened and to which entity
/// - `performed_by_*`: the actor credited with the action
/// - `coc_*`: the customer-or-company the entry is attached to
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLogModel {
    pub id: Uuid,

    /// Kind of entity the activity concerns
    pub activity_type: ActivityType,

    /// Action performed on that entity
    pub activity_action: ActivityAction,

    /// Free-form payload; `Value::Null` when the activity carries no content
    pub activity_content: serde_json::Value,

    /// Identifier of the acted-upon entity
    pub activity_entity_id: Uuid,

    /// Actor kind; System when no performer was supplied
    pub performed_by_type: PerformerType,

    /// Actor identifier; None for System and for anonymous Customer performers
    pub performed_by_id: Option<Uuid>,

    /// Kind of business entity this entry is attached to
    pub coc_type: CocType,

    /// Identifier of that business entity; always set together with `coc_type`
    pub coc_id: Uuid,

    pub created_at: DateTime<Utc>,
}

impl Identifiable for ActivityLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Actor descriptor passed to the create primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    pub performer_type: PerformerType,
    pub performer_id: Option<Uuid>,
}

impl Performer {
    pub fn system() -> Self {
        Performer {
            performer_type: PerformerType::System,
            performer_id: None,
        }
    }

    pub fn user(id: Uuid) -> Self {
        Performer {
            performer_type: PerformerType::User,
            performer_id: Some(id),
        }
    }

    /// Customer performer without an identifier, as written by the
    /// conversation-message dedup path
    pub fn customer() -> Self {
        Performer {
            performer_type: PerformerType::Customer,
            performer_id: None,
        }
    }
}

impl Default for Performer {
    fn default() -> Self {
        Performer::system()
    }
}

/// Record shape minus the performer, as accepted by the create primitive.
/// `id` and `created_at` are generated at creation.
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub activity_type: ActivityType,
    pub activity_action: ActivityAction,
    pub activity_content: serde_json::Value,
    pub activity_entity_id: Uuid,
    pub coc_type: CocType,
    pub coc_id: Uuid,
}

impl NewActivityLog {
    /// Materialize a persistable row, stamping the id, the performer and the
    /// creation time
    pub fn into_model(self, performer: Performer) -> ActivityLogModel {
        ActivityLogModel {
            id: Uuid::new_v4(),
            activity_type: self.activity_type,
            activity_action: self.activity_action,
            activity_content: self.activity_content,
            activity_entity_id: self.activity_entity_id,
            performed_by_type: performer.performer_type,
            performed_by_id: performer.performer_id,
            coc_type: self.coc_type,
            coc_id: self.coc_id,
            created_at: Utc::now(),
        }
    }
}
