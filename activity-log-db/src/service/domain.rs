use heapless::String as HeaplessString;
use uuid::Uuid;

use crate::models::common_enums::CocType;

/// Internal note written by a user against a customer or company
#[derive(Debug, Clone)]
pub struct NoteEntity {
    pub id: Uuid,
    /// Free-form note body
    pub content: serde_json::Value,
    /// Kind of business entity the note is attached to
    pub content_type: CocType,
    /// Identifier of that business entity
    pub content_type_id: Uuid,
}

/// Inbound or outbound conversation message
#[derive(Debug, Clone)]
pub struct MessageEntity {
    pub id: Uuid,
    pub content: serde_json::Value,
}

/// Customer as seen by the recording operations
#[derive(Debug, Clone)]
pub struct CustomerEntity {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    /// Companies the customer is associated with, in their given order
    pub company_ids: Vec<Uuid>,
}

/// Company as seen by the recording operations
#[derive(Debug, Clone)]
pub struct CompanyEntity {
    pub id: Uuid,
    pub name: HeaplessString<100>,
}

/// Segment a customer or company was added to
#[derive(Debug, Clone)]
pub struct SegmentEntity {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    /// Kind of business entity this segment groups
    pub content_type: CocType,
}

/// Entity added to a segment; its kind is implied by the segment's
/// `content_type`
#[derive(Debug, Clone, Copy)]
pub struct TargetEntity {
    pub id: Uuid,
}

/// Acting user credited as the performer of an activity
#[derive(Debug, Clone, Copy)]
pub struct UserEntity {
    pub id: Uuid,
}
