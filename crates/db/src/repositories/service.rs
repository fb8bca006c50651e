use crate::models::DbService;
use chrono::Utc;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    name: &str,
    description: &str,
    duration: i32,
    price: f64,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, professional_id, name, description, duration, price, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, professional_id, name, description, duration, price, created_at
        "#,
    )
    .bind(id)
    .bind(professional_id)
    .bind(name)
    .bind(description)
    .bind(duration)
    .bind(price)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, professional_id, name, description, duration, price, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn get_services_by_professional_id(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, professional_id, name, description, duration, price, created_at
        FROM services
        WHERE professional_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(professional_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    duration: Option<i32>,
    price: Option<f64>,
) -> Result<DbService> {
    let service = get_service_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Service not found"))?;

    let name = name.unwrap_or(&service.name);
    let description = description.unwrap_or(&service.description);
    let duration = duration.unwrap_or(service.duration);
    let price = price.unwrap_or(service.price);

    let updated = sqlx::query_as::<_, DbService>(
        r#"
        UPDATE services
        SET name = $2, description = $3, duration = $4, price = $5
        WHERE id = $1
        RETURNING id, professional_id, name, description, duration, price, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(duration)
    .bind(price)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

pub async fn delete_service(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
