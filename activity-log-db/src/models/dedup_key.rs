use uuid::Uuid;

use crate::models::activity_log::ActivityLogModel;
use crate::models::common_enums::{ActivityAction, ActivityType, CocType, PerformerType};

/// # Documentation
/// Filter tuple used to detect an already-existing log entry before inserting
/// a new one. The conversation-message key constrains the performer kind to
/// Customer; the segment key leaves the performer unconstrained. The key is
/// matched literally and must not be broadened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDedupKey {
    pub activity_type: ActivityType,
    pub activity_action: ActivityAction,
    pub activity_entity_id: Uuid,
    pub coc_type: CocType,
    pub coc_id: Uuid,
    /// None means the performer kind does not participate in the key
    pub performed_by_type: Option<PerformerType>,
}

impl ActivityDedupKey {
    /// Key for a customer-performed conversation message against one coc
    pub fn conversation_message(message_id: Uuid, coc_type: CocType, coc_id: Uuid) -> Self {
        ActivityDedupKey {
            activity_type: ActivityType::ConversationMessage,
            activity_action: ActivityAction::Create,
            activity_entity_id: message_id,
            coc_type,
            coc_id,
            performed_by_type: Some(PerformerType::Customer),
        }
    }

    /// Key for a segment membership entry against one coc
    pub fn segment_membership(segment_id: Uuid, coc_type: CocType, coc_id: Uuid) -> Self {
        ActivityDedupKey {
            activity_type: ActivityType::Segment,
            activity_action: ActivityAction::Create,
            activity_entity_id: segment_id,
            coc_type,
            coc_id,
            performed_by_type: None,
        }
    }

    /// True when the given row satisfies every constraint of this key
    pub fn matches(&self, model: &ActivityLogModel) -> bool {
        model.activity_type == self.activity_type
            && model.activity_action == self.activity_action
            && model.activity_entity_id == self.activity_entity_id
            && model.coc_type == self.coc_type
            && model.coc_id == self.coc_id
            && self
                .performed_by_type
                .map_or(true, |performer| model.performed_by_type == performer)
    }
}
