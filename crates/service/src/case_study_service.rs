use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, QueryOrder, ColumnTrait};
use uuid::Uuid;
use chrono::Utc;
use models::case_study::{self, Entity as CaseStudyEntity};
use crate::errors::ServiceError;

pub async fn list_case_studies(db: &DatabaseConnection) -> Result<Vec<case_study::Model>, ServiceError> {
    let rows = CaseStudyEntity::find()
        .order_by_asc(case_study::Column::SortOrder)
        .order_by_asc(case_study::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_active_case_studies(db: &DatabaseConnection) -> Result<Vec<case_study::Model>, ServiceError> {
    let rows = CaseStudyEntity::find()
        .filter(case_study::Column::IsActive.eq(true))
        .order_by_asc(case_study::Column::SortOrder)
        .order_by_asc(case_study::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create_case_study(
    db: &DatabaseConnection,
    title: &str,
    summary: Option<&str>,
    client_name: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<case_study::Model, ServiceError> {
    let created = case_study::create(db, title, summary, client_name, sort_order, is_active).await?;
    Ok(created)
}

pub async fn get_case_study(db: &DatabaseConnection, id: Uuid) -> Result<Option<case_study::Model>, ServiceError> {
    let found = CaseStudyEntity::find_by_id(id)
        .one(db)
        .await?;
    Ok(found)
}

/// Full-field replacement; restamps `updated_at`.
pub async fn update_case_study(
    db: &DatabaseConnection,
    id: Uuid,
    title: &str,
    summary: Option<&str>,
    client_name: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<(), ServiceError> {
    case_study::validate_title(title)?;
    let current = CaseStudyEntity::find_by_id(id)
        .one(db)
        .await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("case_study")); };
    let mut am: case_study::ActiveModel = existing.into();
    am.title = Set(title.to_string());
    am.summary = Set(summary.map(|s| s.to_string()));
    am.client_name = Set(client_name.map(|s| s.to_string()));
    am.sort_order = Set(sort_order);
    am.is_active = Set(is_active);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(())
}

pub async fn delete_case_study(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = CaseStudyEntity::delete_by_id(id)
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
