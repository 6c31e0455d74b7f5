use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, QueryOrder, ColumnTrait};
use uuid::Uuid;
use chrono::Utc;
use models::team_member::{self, Entity as TeamMemberEntity};
use crate::errors::ServiceError;

pub async fn list_team_members(db: &DatabaseConnection) -> Result<Vec<team_member::Model>, ServiceError> {
    let rows = TeamMemberEntity::find()
        .order_by_asc(team_member::Column::SortOrder)
        .order_by_asc(team_member::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_active_team_members(db: &DatabaseConnection) -> Result<Vec<team_member::Model>, ServiceError> {
    let rows = TeamMemberEntity::find()
        .filter(team_member::Column::IsActive.eq(true))
        .order_by_asc(team_member::Column::SortOrder)
        .order_by_asc(team_member::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create_team_member(
    db: &DatabaseConnection,
    name: &str,
    role_title: Option<&str>,
    bio: Option<&str>,
    photo_url: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<team_member::Model, ServiceError> {
    let created = team_member::create(db, name, role_title, bio, photo_url, sort_order, is_active).await?;
    Ok(created)
}

pub async fn get_team_member(db: &DatabaseConnection, id: Uuid) -> Result<Option<team_member::Model>, ServiceError> {
    let found = TeamMemberEntity::find_by_id(id)
        .one(db)
        .await?;
    Ok(found)
}

/// Full-field replacement; restamps `updated_at`.
pub async fn update_team_member(
    db: &DatabaseConnection,
    id: Uuid,
    name: &str,
    role_title: Option<&str>,
    bio: Option<&str>,
    photo_url: Option<&str>,
    sort_order: i32,
    is_active: bool,
) -> Result<(), ServiceError> {
    team_member::validate_name(name)?;
    if let Some(u) = photo_url {
        team_member::validate_photo_url(u)?;
    }
    let current = TeamMemberEntity::find_by_id(id)
        .one(db)
        .await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("team_member")); };
    let mut am: team_member::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.role_title = Set(role_title.map(|s| s.to_string()));
    am.bio = Set(bio.map(|s| s.to_string()));
    am.photo_url = Set(photo_url.map(|s| s.to_string()));
    am.sort_order = Set(sort_order);
    am.is_active = Set(is_active);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(())
}

pub async fn delete_team_member(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = TeamMemberEntity::delete_by_id(id)
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn team_member_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let a = create_team_member(
            &db,
            "Ada Lovelace",
            Some("Lead Engineer"),
            Some("First of her kind."),
            Some("/static/team/ada.jpg"),
            1,
            true,
        ).await?;

        let found = get_team_member(&db, a.id).await?.unwrap();
        assert_eq!(found.name, "Ada Lovelace");
        assert_eq!(found.role_title.as_deref(), Some("Lead Engineer"));

        let before = found.updated_at;
        update_team_member(&db, a.id, "Ada Lovelace", Some("Principal Engineer"), None, None, 2, false).await?;
        let updated = get_team_member(&db, a.id).await?.unwrap();
        assert_eq!(updated.role_title.as_deref(), Some("Principal Engineer"));
        assert!(updated.bio.is_none());
        assert!(!updated.is_active);
        assert!(updated.updated_at > before);

        let active = list_active_team_members(&db).await?;
        assert!(!active.iter().any(|x| x.id == a.id));
        let all = list_team_members(&db).await?;
        assert!(all.iter().any(|x| x.id == a.id));

        assert!(delete_team_member(&db, a.id).await?);
        assert!(get_team_member(&db, a.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_bad_photo_url() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let res = create_team_member(&db, "Bob", None, None, Some("ftp://nope"), 0, true).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
        Ok(())
    }
}
