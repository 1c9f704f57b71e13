use std::marker::PhantomData;
use std::sync::Arc;

use activity_log_api::{ActivityLogError, ActivityLogResult};
use sqlx::Database;
use tracing::debug;
use uuid::Uuid;

use crate::models::activity_log::{ActivityLogModel, NewActivityLog, Performer};
use crate::models::common_enums::{ActivityAction, ActivityType, CocType};
use crate::models::dedup_key::ActivityDedupKey;
use crate::repository::create::Create;
use crate::repository::find_by_dedup_key::FindByDedupKey;
use crate::service::domain::{
    CompanyEntity, CustomerEntity, MessageEntity, NoteEntity, SegmentEntity, TargetEntity,
    UserEntity,
};

/// # Documentation
/// ActivityLogStore appends audit entries for customer and company activity,
/// suppressing duplicates for the conversation-message and segment-membership
/// categories via a check-then-insert against the injected repository.
///
/// The check and the insert are two separate store calls, so two concurrent
/// callers with the same dedup key can both insert. That race is accepted
/// behavior; no uniqueness constraint backs the key.
pub struct ActivityLogStore<DB: Database, R> {
    repository: Arc<R>,
    _db: PhantomData<DB>,
}

impl<DB, R> ActivityLogStore<DB, R>
where
    DB: Database,
    R: Create<DB, ActivityLogModel> + FindByDedupKey<DB, ActivityLogModel>,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _db: PhantomData,
        }
    }

    /// General insert primitive. A missing performer defaults to the System
    /// actor.
    pub async fn create(
        &self,
        performer: Option<Performer>,
        new: NewActivityLog,
    ) -> ActivityLogResult<ActivityLogModel> {
        let model = new.into_model(performer.unwrap_or_default());
        let saved = self
            .repository
            .create(model)
            .await
            .map_err(map_store_error)?;
        debug!(
            activity_log_id = %saved.id,
            activity_type = %saved.activity_type,
            coc_id = %saved.coc_id,
            "activity log entry created"
        );
        Ok(saved)
    }

    /// Record the creation of an internal note. Always inserts; notes are
    /// never deduplicated.
    pub async fn record_internal_note(
        &self,
        note: &NoteEntity,
        user: &UserEntity,
    ) -> ActivityLogResult<ActivityLogModel> {
        let new = NewActivityLog {
            activity_type: ActivityType::InternalNote,
            activity_action: ActivityAction::Create,
            activity_content: note.content.clone(),
            activity_entity_id: note.id,
            coc_type: note.content_type,
            coc_id: note.content_type_id,
        };
        self.create(Some(Performer::user(user.id)), new).await
    }

    /// Record a customer-performed conversation message against every company
    /// the customer is associated with, then against the customer itself.
    ///
    /// Each coc target is checked independently; targets that already carry a
    /// customer-performed entry for this message are skipped. Returns the
    /// entries inserted by this call (0..=N+1 for N associated companies).
    pub async fn record_conversation_message(
        &self,
        message: &MessageEntity,
        customer: Option<&CustomerEntity>,
    ) -> ActivityLogResult<Vec<ActivityLogModel>> {
        let customer = customer.ok_or_else(|| {
            ActivityLogError::InvalidArgument(
                "customer is required to record a conversation message".to_string(),
            )
        })?;

        let mut inserted = Vec::new();
        for company_id in &customer.company_ids {
            if let Some(entry) = self
                .record_message_for_coc(message, CocType::Company, *company_id)
                .await?
            {
                inserted.push(entry);
            }
        }
        if let Some(entry) = self
            .record_message_for_coc(message, CocType::Customer, customer.id)
            .await?
        {
            inserted.push(entry);
        }
        Ok(inserted)
    }

    async fn record_message_for_coc(
        &self,
        message: &MessageEntity,
        coc_type: CocType,
        coc_id: Uuid,
    ) -> ActivityLogResult<Option<ActivityLogModel>> {
        // The key constrains the performer kind to Customer: a System- or
        // User-performed entry for the same message and coc does not suppress
        // this insert.
        let key = ActivityDedupKey::conversation_message(message.id, coc_type, coc_id);
        if let Some(existing) = self
            .repository
            .find_by_dedup_key(&key)
            .await
            .map_err(map_store_error)?
        {
            debug!(
                activity_log_id = %existing.id,
                message_id = %message.id,
                coc_id = %coc_id,
                "duplicate conversation message entry suppressed"
            );
            return Ok(None);
        }

        let new = NewActivityLog {
            activity_type: ActivityType::ConversationMessage,
            activity_action: ActivityAction::Create,
            activity_content: message.content.clone(),
            activity_entity_id: message.id,
            coc_type,
            coc_id,
        };
        let saved = self.create(Some(Performer::customer()), new).await?;
        Ok(Some(saved))
    }

    /// Record that a customer or company was added to a segment. When an
    /// entry for this segment and target already exists it is returned
    /// unchanged and nothing is inserted.
    pub async fn record_segment_membership(
        &self,
        segment: &SegmentEntity,
        target: Option<&TargetEntity>,
    ) -> ActivityLogResult<ActivityLogModel> {
        let target = target.ok_or_else(|| {
            ActivityLogError::InvalidArgument(
                "target is required to record a segment membership".to_string(),
            )
        })?;

        let key = ActivityDedupKey::segment_membership(segment.id, segment.content_type, target.id);
        if let Some(existing) = self
            .repository
            .find_by_dedup_key(&key)
            .await
            .map_err(map_store_error)?
        {
            debug!(
                activity_log_id = %existing.id,
                segment_id = %segment.id,
                coc_id = %target.id,
                "duplicate segment membership entry suppressed"
            );
            return Ok(existing);
        }

        let new = NewActivityLog {
            activity_type: ActivityType::Segment,
            activity_action: ActivityAction::Create,
            activity_content: serde_json::Value::String(segment.name.to_string()),
            activity_entity_id: segment.id,
            coc_type: segment.content_type,
            coc_id: target.id,
        };
        self.create(None, new).await
    }

    /// Record the registration of a new customer. Always inserts; credited to
    /// the given user, or to System when no user is supplied.
    pub async fn record_customer_registration(
        &self,
        customer: &CustomerEntity,
        user: Option<&UserEntity>,
    ) -> ActivityLogResult<ActivityLogModel> {
        let new = NewActivityLog {
            activity_type: ActivityType::Customer,
            activity_action: ActivityAction::Create,
            activity_content: serde_json::Value::String(customer.name.to_string()),
            activity_entity_id: customer.id,
            coc_type: CocType::Customer,
            coc_id: customer.id,
        };
        self.create(user.map(|u| Performer::user(u.id)), new).await
    }

    /// Record the registration of a new company. Symmetric to customer
    /// registration.
    pub async fn record_company_registration(
        &self,
        company: &CompanyEntity,
        user: Option<&UserEntity>,
    ) -> ActivityLogResult<ActivityLogModel> {
        let new = NewActivityLog {
            activity_type: ActivityType::Company,
            activity_action: ActivityAction::Create,
            activity_content: serde_json::Value::String(company.name.to_string()),
            activity_entity_id: company.id,
            coc_type: CocType::Company,
            coc_id: company.id,
        };
        self.create(user.map(|u| Performer::user(u.id)), new).await
    }
}

/// Classify a repository error: SQLSTATE classes 22 (data) and 23 (integrity)
/// cover bad enum literals and missing required columns and surface as
/// validation failures; everything else is a store availability problem.
fn map_store_error(err: Box<dyn std::error::Error + Send + Sync>) -> ActivityLogError {
    if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
        let is_validation = db_err
            .code()
            .map_or(false, |code| code.starts_with("22") || code.starts_with("23"));
        if is_validation {
            return ActivityLogError::ValidationError(db_err.message().to_string());
        }
    }
    ActivityLogError::StoreUnavailable(err.to_string())
}
