use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "working_processes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub step_no: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(t: &str) -> Result<(), errors::ModelError> {
    if t.trim().is_empty() {
        return Err(errors::ModelError::Validation("title required"));
    }
    Ok(())
}

pub fn validate_step_no(n: i32) -> Result<(), errors::ModelError> {
    if n < 1 {
        return Err(errors::ModelError::Validation("step_no must be >= 1"));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    step_no: i32,
    title: &str,
    description: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<Model, errors::ModelError> {
    validate_step_no(step_no)?;
    validate_title(title)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        step_no: Set(step_no),
        title: Set(title.to_string()),
        description: Set(description.map(|s| s.to_string())),
        sort_order: Set(sort_order),
        is_active: Set(is_active),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
