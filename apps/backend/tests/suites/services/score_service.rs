use std::sync::Arc;

use backend::adapters::{InMemoryScoreCardRepo, ScoreCardRepoSea};
use backend::config::db::{DbKind, RuntimeEnv};
use backend::domain::{Hole, ScoreRules};
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend::infra::db::bootstrap_db;
use backend::repos::ScoreCardRepo;
use backend::services::ScoreService;

async fn stores() -> Vec<(&'static str, Arc<dyn ScoreCardRepo>)> {
    let conn = bootstrap_db(DbKind::SqliteMemory, RuntimeEnv::Test)
        .await
        .expect("sqlite memory bootstrap");
    let memory: Arc<dyn ScoreCardRepo> = Arc::new(InMemoryScoreCardRepo::new());
    let sqlite: Arc<dyn ScoreCardRepo> = Arc::new(ScoreCardRepoSea::new(conn));
    vec![("memory", memory), ("sqlite", sqlite)]
}

#[tokio::test]
async fn total_tracks_every_submission() -> Result<(), AppError> {
    for (store, repo) in stores().await {
        let svc = ScoreService::new(repo, ScoreRules::default());

        let mut expected = [0i32; 9];
        let plays = [(1, 3), (5, -2), (9, 4), (5, 1), (2, 0), (7, 10)];
        for (hole, score) in plays {
            svc.submit("Alice", hole, score).await?;
            expected[(hole - 1) as usize] = score as i32;
        }

        let card = svc.find("Alice").await?.expect("card exists");
        assert_eq!(card.holes(), &expected, "{store}");
        assert_eq!(card.total(), expected.iter().sum::<i32>(), "{store}");
    }
    Ok(())
}

#[tokio::test]
async fn first_submission_creates_card() -> Result<(), AppError> {
    for (store, repo) in stores().await {
        let svc = ScoreService::new(repo, ScoreRules::default());
        assert!(svc.find("Alice").await?.is_none(), "{store}");

        svc.submit("Alice", 3, 4).await?;

        let card = svc.find("Alice").await?.expect("card exists");
        for hole in Hole::all() {
            let want = if hole.number() == 3 { 4 } else { 0 };
            assert_eq!(card.hole(hole), want, "{store} hole {hole}");
        }
        assert_eq!(card.total(), 4, "{store}");
    }
    Ok(())
}

#[tokio::test]
async fn standings_break_ties_by_name() -> Result<(), AppError> {
    for (store, repo) in stores().await {
        let svc = ScoreService::new(repo, ScoreRules::default());
        svc.submit("Zed", 1, 2).await?;
        svc.submit("Amy", 1, 2).await?;
        svc.submit("Max", 1, -3).await?;

        let names: Vec<String> = svc
            .standings()
            .await?
            .into_iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, ["Max", "Amy", "Zed"], "{store}");
    }
    Ok(())
}

#[tokio::test]
async fn rejected_submission_leaves_card_intact() -> Result<(), AppError> {
    for (store, repo) in stores().await {
        let svc = ScoreService::new(repo, ScoreRules::default());
        svc.submit("Alice", 1, 5).await?;

        let err = svc.submit("Alice", 1, 42).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidScore, "{store}");

        let card = svc.find("Alice").await?.expect("card exists");
        assert_eq!(card.hole(Hole::FIRST), 5, "{store}");
    }
    Ok(())
}

#[tokio::test]
async fn permissive_rules_accept_loose_names() -> Result<(), AppError> {
    for (store, repo) in stores().await {
        let svc = ScoreService::new(repo, ScoreRules::permissive());

        svc.submit("  Mary Jane 2 ", 2, 1).await?;

        let card = svc.find("Mary Jane 2").await?.expect("trimmed name is the key");
        assert_eq!(card.total(), 1, "{store}");
        assert!(svc.submit("   ", 2, 1).await.is_err(), "{store}");
    }
    Ok(())
}

#[tokio::test]
async fn join_delete_reset_lifecycle() -> Result<(), AppError> {
    for (store, repo) in stores().await {
        let svc = ScoreService::new(repo, ScoreRules::default());

        svc.join("Alice").await?;
        svc.join("Bob").await?;
        let err = svc.join("Bob").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::PlayerExists, "{store}");

        svc.delete("Carol").await?;
        svc.delete("Alice").await?;
        assert!(svc.find("Alice").await?.is_none(), "{store}");

        assert_eq!(svc.reset().await?, 1, "{store}");
        assert!(svc.standings().await?.is_empty(), "{store}");
    }
    Ok(())
}
