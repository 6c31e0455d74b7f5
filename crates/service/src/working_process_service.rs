use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, QueryOrder, ColumnTrait};
use uuid::Uuid;
use chrono::Utc;
use models::working_process::{self, Entity as WorkingProcessEntity};
use crate::errors::ServiceError;

pub async fn list_working_processes(db: &DatabaseConnection) -> Result<Vec<working_process::Model>, ServiceError> {
    let rows = WorkingProcessEntity::find()
        .order_by_asc(working_process::Column::SortOrder)
        .order_by_asc(working_process::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_active_working_processes(db: &DatabaseConnection) -> Result<Vec<working_process::Model>, ServiceError> {
    let rows = WorkingProcessEntity::find()
        .filter(working_process::Column::IsActive.eq(true))
        .order_by_asc(working_process::Column::SortOrder)
        .order_by_asc(working_process::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create_working_process(
    db: &DatabaseConnection,
    step_no: i32,
    title: &str,
    description: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<working_process::Model, ServiceError> {
    let created = working_process::create(db, step_no, title, description, sort_order, is_active).await?;
    Ok(created)
}

pub async fn get_working_process(db: &DatabaseConnection, id: Uuid) -> Result<Option<working_process::Model>, ServiceError> {
    let found = WorkingProcessEntity::find_by_id(id)
        .one(db)
        .await?;
    Ok(found)
}

/// Full-field replacement; restamps `updated_at`.
pub async fn update_working_process(
    db: &DatabaseConnection,
    id: Uuid,
    step_no: i32,
    title: &str,
    description: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<(), ServiceError> {
    working_process::validate_step_no(step_no)?;
    working_process::validate_title(title)?;
    let current = WorkingProcessEntity::find_by_id(id)
        .one(db)
        .await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("working_process")); };
    let mut am: working_process::ActiveModel = existing.into();
    am.step_no = Set(step_no);
    am.title = Set(title.to_string());
    am.description = Set(description.map(|s| s.to_string()));
    am.sort_order = Set(sort_order);
    am.is_active = Set(is_active);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(())
}

pub async fn delete_working_process(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = WorkingProcessEntity::delete_by_id(id)
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn working_process_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let a = create_working_process(&db, 1, "Consultation", Some("Initial call"), 1, true).await?;
        let b = create_working_process(&db, 2, "Discovery", None, 2, true).await?;

        let found = get_working_process(&db, a.id).await?.unwrap();
        assert_eq!(found.step_no, 1);
        assert_eq!(found.title, "Consultation");

        // list comes back in non-decreasing sort_order
        let list = list_active_working_processes(&db).await?;
        let orders: Vec<i32> = list.iter().map(|p| p.sort_order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        let pos_a = list.iter().position(|p| p.id == a.id).unwrap();
        let pos_b = list.iter().position(|p| p.id == b.id).unwrap();
        assert!(pos_a < pos_b);

        let before = found.updated_at;
        update_working_process(&db, a.id, 1, "Kickoff", Some("Scoping call"), 1, true).await?;
        let updated = get_working_process(&db, a.id).await?.unwrap();
        assert_eq!(updated.title, "Kickoff");
        assert!(updated.updated_at > before);

        assert!(delete_working_process(&db, a.id).await?);
        assert!(delete_working_process(&db, b.id).await?);
        let list = list_working_processes(&db).await?;
        assert!(!list.iter().any(|p| p.id == a.id || p.id == b.id));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_zero_step_no() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let res = create_working_process(&db, 0, "Bad", None, 0, true).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        Ok(())
    }
}
