use activity_log_db::models::activity_log::ActivityLogModel;
use activity_log_db::models::common_enums::{
    ActivityAction, ActivityType, CocType, PerformerType,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

pub fn create_test_activity_log(coc_type: CocType, coc_id: Uuid) -> ActivityLogModel {
    ActivityLogModel {
        id: Uuid::new_v4(),
        activity_type: ActivityType::InternalNote,
        activity_action: ActivityAction::Create,
        activity_content: json!({"text": "test entry"}),
        activity_entity_id: Uuid::new_v4(),
        performed_by_type: PerformerType::System,
        performed_by_id: None,
        coc_type,
        coc_id,
        created_at: Utc::now(),
    }
}
