use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, QueryOrder, ColumnTrait};
use uuid::Uuid;
use chrono::Utc;
use models::service_item::{self, Entity as ServiceItemEntity};
use crate::errors::ServiceError;

/// List every service row for the admin table, in display order.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service_item::Model>, ServiceError> {
    let rows = ServiceItemEntity::find()
        .order_by_asc(service_item::Column::SortOrder)
        .order_by_asc(service_item::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

/// Active rows only, for public rendering.
pub async fn list_active_services(db: &DatabaseConnection) -> Result<Vec<service_item::Model>, ServiceError> {
    let rows = ServiceItemEntity::find()
        .filter(service_item::Column::IsActive.eq(true))
        .order_by_asc(service_item::Column::SortOrder)
        .order_by_asc(service_item::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

/// Create a service after validation.
pub async fn create_service(
    db: &DatabaseConnection,
    title: &str,
    description: Option<&str>,
    icon: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<service_item::Model, ServiceError> {
    // validations are in models::service_item
    let created = service_item::create(db, title, description, icon, sort_order, is_active).await?;
    Ok(created)
}

/// Get a service by id.
pub async fn get_service(db: &DatabaseConnection, id: Uuid) -> Result<Option<service_item::Model>, ServiceError> {
    let found = ServiceItemEntity::find_by_id(id)
        .one(db)
        .await?;
    Ok(found)
}

/// Replace all mutable fields and restamp `updated_at`. Returns success
/// only; callers re-fetch if they need the new record.
pub async fn update_service(
    db: &DatabaseConnection,
    id: Uuid,
    title: &str,
    description: Option<&str>,
    icon: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<(), ServiceError> {
    service_item::validate_title(title)?;
    let current = ServiceItemEntity::find_by_id(id)
        .one(db)
        .await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("service")); };
    let mut am: service_item::ActiveModel = existing.into();
    am.title = Set(title.to_string());
    am.description = Set(description.map(|s| s.to_string()));
    am.icon = Set(icon.map(|s| s.to_string()));
    am.sort_order = Set(sort_order);
    am.is_active = Set(is_active);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(())
}

/// Delete a service; returns true if deleted.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = ServiceItemEntity::delete_by_id(id)
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
