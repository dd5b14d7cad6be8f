use crate::errors::ModelError;
use crate::job::{self, JobFields};
use sea_orm::{EntityTrait, PaginatorTrait};
use anyhow::Result;

fn acme() -> JobFields {
    JobFields {
        company: "Acme".into(),
        position: "Engineer".into(),
        status: "applied".into(),
        date: "2024-01-01".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamp() -> Result<()> {
    let db = super::setup_test_db().await?;
    let before = chrono::Utc::now();

    let created = job::create(&db, acme()).await?;
    assert!(created.id >= 1);
    assert_eq!(created.company, "Acme");
    assert_eq!(created.salary, "");
    assert_eq!(created.location, "");
    assert_eq!(created.notes, "");
    assert!(created.created_at.timestamp() >= before.timestamp() - 1);
    Ok(())
}

#[tokio::test]
async fn test_ids_strictly_increase_even_after_delete() -> Result<()> {
    let db = super::setup_test_db().await?;

    let a = job::create(&db, acme()).await?;
    let b = job::create(&db, acme()).await?;
    assert!(b.id > a.id);

    job::Entity::delete_by_id(b.id).exec(&db).await?;
    let c = job::create(&db, acme()).await?;
    assert!(c.id > b.id, "AUTOINCREMENT must not reuse {}", b.id);
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_missing_required_without_writing() -> Result<()> {
    let db = super::setup_test_db().await?;

    let mut no_company = acme();
    no_company.company.clear();
    assert!(matches!(job::create(&db, no_company).await, Err(ModelError::Validation(_))));

    let mut no_position = acme();
    no_position.position.clear();
    assert!(matches!(job::create(&db, no_position).await, Err(ModelError::Validation(_))));

    assert_eq!(job::Entity::find().count(&db).await?, 0);
    Ok(())
}
