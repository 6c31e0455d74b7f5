use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub role_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub photo_url: Option<String>,
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

pub fn validate_name(n: &str) -> Result<(), errors::ModelError> {
    if n.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required"));
    }
    Ok(())
}

pub fn validate_photo_url(u: &str) -> Result<(), errors::ModelError> {
    if !(u.starts_with("http://") || u.starts_with("https://") || u.starts_with('/')) {
        return Err(errors::ModelError::Validation("photo_url must be http(s) or site-relative"));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    role_title: Option<&str>,
    bio: Option<&str>,
    photo_url: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    if let Some(u) = photo_url {
        validate_photo_url(u)?;
    }

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        role_title: Set(role_title.map(|s| s.to_string())),
        bio: Set(bio.map(|s| s.to_string())),
        photo_url: Set(photo_url.map(|s| s.to_string())),
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
    fn name_must_not_be_blank() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn photo_url_accepts_http_and_relative() {
        assert!(validate_photo_url("https://cdn.example.com/a.jpg").is_ok());
        assert!(validate_photo_url("/static/team/a.jpg").is_ok());
        assert!(validate_photo_url("ftp://nope").is_err());
    }
}
