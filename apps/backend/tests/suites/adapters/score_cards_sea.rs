use backend::adapters::score_cards_sea::{self, ScoreCardRepoSea, ScoreCardUpsert};
use backend::config::db::{DbKind, RuntimeEnv};
use backend::domain::{Hole, ScoreCard};
use backend::entities::score_cards;
use backend::errors::domain::{ConflictKind, DomainError};
use backend::infra::db::bootstrap_db;
use backend::repos::ScoreCardRepo;
use sea_orm::{DatabaseConnection, EntityTrait};

async fn db() -> DatabaseConnection {
    bootstrap_db(DbKind::SqliteMemory, RuntimeEnv::Test)
        .await
        .expect("sqlite memory bootstrap")
}

fn card(name: &str, scores: &[(i64, i32)]) -> ScoreCard {
    let mut card = ScoreCard::new(name);
    for &(hole, score) in scores {
        card.set_hole(Hole::new(hole).expect("valid hole"), score);
    }
    card
}

#[tokio::test]
async fn upsert_inserts_then_replaces() -> Result<(), DomainError> {
    let conn = db().await;

    score_cards_sea::upsert(&conn, ScoreCardUpsert::from(&card("Alice", &[(1, 3)]))).await?;
    score_cards_sea::upsert(&conn, ScoreCardUpsert::from(&card("Alice", &[(1, 1), (9, 4)])))
        .await?;

    let rows = score_cards::Entity::find().all(&conn).await?;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.name, "Alice");
    assert_eq!(row.hole_one, 1);
    assert_eq!(row.hole_nine, 4);
    assert_eq!(row.score, 5);
    Ok(())
}

#[tokio::test]
async fn stored_score_column_is_the_total() -> Result<(), DomainError> {
    let conn = db().await;
    let repo = ScoreCardRepoSea::new(conn.clone());

    let saved = card("Bob", &[(2, -3), (3, 7), (8, 1)]);
    repo.save(&saved).await?;

    let row = score_cards_sea::find_by_name(&conn, "Bob")
        .await?
        .expect("row exists");
    assert_eq!(row.score, saved.total());
    assert_eq!(row.holes(), *saved.holes());

    let loaded = repo.find_by_name("Bob").await?.expect("card exists");
    assert_eq!(loaded, saved);
    Ok(())
}

#[tokio::test]
async fn holes_win_over_a_stale_total() -> Result<(), DomainError> {
    let conn = db().await;

    let mut stale = ScoreCardUpsert::from(&card("Cleo", &[(4, 2), (5, 2)]));
    stale.total = 99;
    score_cards_sea::upsert(&conn, stale).await?;

    let repo = ScoreCardRepoSea::new(conn);
    let loaded = repo.find_by_name("Cleo").await?.expect("card exists");
    assert_eq!(loaded.total(), 4);
    Ok(())
}

#[tokio::test]
async fn insert_refuses_a_taken_name() -> Result<(), DomainError> {
    let repo = ScoreCardRepoSea::new(db().await);

    let played = card("Dana", &[(6, 3)]);
    repo.insert(&played).await?;

    let err = repo.insert(&card("Dana", &[])).await.unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::PlayerExists, _)),
        "{err:?}"
    );

    let stored = repo.find_by_name("Dana").await?.expect("card exists");
    assert_eq!(stored, played);
    Ok(())
}

#[tokio::test]
async fn list_orders_by_name() -> Result<(), DomainError> {
    let repo = ScoreCardRepoSea::new(db().await);
    for name in ["Mia", "Al", "Zoe", "Bo"] {
        repo.save(&card(name, &[])).await?;
    }

    let names: Vec<String> = repo
        .list_all()
        .await?
        .into_iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, ["Al", "Bo", "Mia", "Zoe"]);
    Ok(())
}

#[tokio::test]
async fn deletes_report_rows_removed() -> Result<(), DomainError> {
    let repo = ScoreCardRepoSea::new(db().await);
    repo.save(&card("Al", &[(1, 1)])).await?;
    repo.save(&card("Bo", &[(1, 1)])).await?;
    repo.save(&card("Cy", &[(1, 1)])).await?;

    assert!(!repo.delete_by_name("Nobody").await?);
    assert!(repo.delete_by_name("Bo").await?);
    assert!(repo.find_by_name("Bo").await?.is_none());

    assert_eq!(repo.delete_all().await?, 2);
    assert!(repo.list_all().await?.is_empty());
    assert_eq!(repo.delete_all().await?, 0);
    Ok(())
}

#[tokio::test]
async fn missing_table_maps_to_infra_error() {
    // Connected but never migrated
    let conn = backend::infra::db::connect_db(
        DbKind::SqliteMemory,
        RuntimeEnv::Test,
        backend::config::db::DbOwner::App,
    )
    .await
    .expect("connect");

    let err = ScoreCardRepoSea::new(conn)
        .find_by_name("Alice")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Infra(_, _)), "{err:?}");
}
