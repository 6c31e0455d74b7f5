use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_name: String,
    pub company: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub quote: String,
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

pub fn validate_author_name(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() {
        return Err(errors::ModelError::Validation("author_name required"));
    }
    Ok(())
}

pub fn validate_quote(q: &str) -> Result<(), errors::ModelError> {
    if q.trim().is_empty() {
        return Err(errors::ModelError::Validation("quote required"));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    author_name: &str,
    company: Option<&str>,
    quote: &str,
    sort_order: i32,
    is_active: bool,
) -> Result<Model, errors::ModelError> {
    validate_author_name(author_name)?;
    validate_quote(quote)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        author_name: Set(author_name.to_string()),
        company: Set(company.map(|s| s.to_string())),
        quote: Set(quote.to_string()),
        sort_order: Set(sort_order),
        is_active: Set(is_active),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_must_not_be_blank() {
        assert!(validate_quote("Great team to work with.").is_ok());
        assert!(validate_quote(" ").is_err());
    }
}
