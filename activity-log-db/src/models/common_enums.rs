use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_type", rename_all = "PascalCase")]
pub enum ActivityType {
    InternalNote,
    ConversationMessage,
    Segment,
    Customer,
    Company,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::InternalNote => write!(f, "InternalNote"),
            ActivityType::ConversationMessage => write!(f, "ConversationMessage"),
            ActivityType::Segment => write!(f, "Segment"),
            ActivityType::Customer => write!(f, "Customer"),
            ActivityType::Company => write!(f, "Company"),
        }
    }
}

impl FromStr for ActivityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InternalNote" => Ok(ActivityType::InternalNote),
            "ConversationMessage" => Ok(ActivityType::ConversationMessage),
            "Segment" => Ok(ActivityType::Segment),
            "Customer" => Ok(ActivityType::Customer),
            "Company" => Ok(ActivityType::Company),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_action", rename_all = "PascalCase")]
pub enum ActivityAction {
    Create,
    Update,
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityAction::Create => write!(f, "Create"),
            ActivityAction::Update => write!(f, "Update"),
        }
    }
}

impl FromStr for ActivityAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(ActivityAction::Create),
            "Update" => Ok(ActivityAction::Update),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "performer_type", rename_all = "PascalCase")]
pub enum PerformerType {
    System,
    User,
    Customer,
}

impl Default for PerformerType {
    fn default() -> Self {
        PerformerType::System
    }
}

impl std::fmt::Display for PerformerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformerType::System => write!(f, "System"),
            PerformerType::User => write!(f, "User"),
            PerformerType::Customer => write!(f, "Customer"),
        }
    }
}

impl FromStr for PerformerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "System" => Ok(PerformerType::System),
            "User" => Ok(PerformerType::User),
            "Customer" => Ok(PerformerType::Customer),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "coc_type", rename_all = "PascalCase")]
pub enum CocType {
    Customer,
    Company,
}

impl std::fmt::Display for CocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CocType::Customer => write!(f, "Customer"),
            CocType::Company => write!(f, "Company"),
        }
    }
}

impl FromStr for CocType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(CocType::Customer),
            "Company" => Ok(CocType::Company),
            _ => Err(()),
        }
    }
}
