use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, QueryOrder, ColumnTrait};
use uuid::Uuid;
use chrono::Utc;
use models::testimonial::{self, Entity as TestimonialEntity};
use crate::errors::ServiceError;

pub async fn list_testimonials(db: &DatabaseConnection) -> Result<Vec<testimonial::Model>, ServiceError> {
    let rows = TestimonialEntity::find()
        .order_by_asc(testimonial::Column::SortOrder)
        .order_by_asc(testimonial::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn list_active_testimonials(db: &DatabaseConnection) -> Result<Vec<testimonial::Model>, ServiceError> {
    let rows = TestimonialEntity::find()
        .filter(testimonial::Column::IsActive.eq(true))
        .order_by_asc(testimonial::Column::SortOrder)
        .order_by_asc(testimonial::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create_testimonial(
    db: &DatabaseConnection,
    author_name: &str,
    company: Option<&str>,
    quote: &str,
    sort_order: i32,
    is_active: bool,
) -> Result<testimonial::Model, ServiceError> {
    let created = testimonial::create(db, author_name, company, quote, sort_order, is_active).await?;
    Ok(created)
}

pub async fn get_testimonial(db: &DatabaseConnection, id: Uuid) -> Result<Option<testimonial::Model>, ServiceError> {
    let found = TestimonialEntity::find_by_id(id)
        .one(db)
        .await?;
    Ok(found)
}

/// Full-field replacement; restamps `updated_at`.
pub async fn update_testimonial(
    db: &DatabaseConnection,
    id: Uuid,
    author_name: &str,
    company: Option<&str>,
    quote: &str,
    sort_order: i32,
    is_active: bool,
) -> Result<(), ServiceError> {
    testimonial::validate_author_name(author_name)?;
    testimonial::validate_quote(quote)?;
    let current = TestimonialEntity::find_by_id(id)
        .one(db)
        .await?;
    let Some(existing) = current else { return Err(ServiceError::not_found("testimonial")); };
    let mut am: testimonial::ActiveModel = existing.into();
    am.author_name = Set(author_name.to_string());
    am.company = Set(company.map(|s| s.to_string()));
    am.quote = Set(quote.to_string());
    am.sort_order = Set(sort_order);
    am.is_active = Set(is_active);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(())
}

pub async fn delete_testimonial(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = TestimonialEntity::delete_by_id(id)
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}
