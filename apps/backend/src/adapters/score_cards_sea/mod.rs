//! SeaORM adapter for the score card store.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::warn;

use crate::domain::ScoreCard;
use crate::entities::score_cards;
use crate::errors::domain::DomainError;
use crate::repos::score_cards::ScoreCardRepo;

pub mod dto;

pub use dto::ScoreCardUpsert;

// Adapter functions return DbErr; ScoreCardRepoSea maps to DomainError via From<DbErr>.

pub async fn find_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Option<score_cards::Model>, sea_orm::DbErr> {
    score_cards::Entity::find_by_id(name.to_string())
        .one(conn)
        .await
}

fn active_model(dto: ScoreCardUpsert) -> score_cards::ActiveModel {
    let [one, two, three, four, five, six, seven, eight, nine] = dto.holes;

    score_cards::ActiveModel {
        name: Set(dto.name),
        hole_one: Set(one),
        hole_two: Set(two),
        hole_three: Set(three),
        hole_four: Set(four),
        hole_five: Set(five),
        hole_six: Set(six),
        hole_seven: Set(seven),
        hole_eight: Set(eight),
        hole_nine: Set(nine),
        score: Set(dto.total),
    }
}

/// Plain insert; a taken name surfaces as a unique violation.
pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    dto: ScoreCardUpsert,
) -> Result<(), sea_orm::DbErr> {
    score_cards::Entity::insert(active_model(dto))
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Single-statement insert-or-replace keyed on name.
pub async fn upsert<C: ConnectionTrait>(
    conn: &C,
    dto: ScoreCardUpsert,
) -> Result<(), sea_orm::DbErr> {
    score_cards::Entity::insert(active_model(dto))
        .on_conflict(
            OnConflict::column(score_cards::Column::Name)
                .update_columns([
                    score_cards::Column::HoleOne,
                    score_cards::Column::HoleTwo,
                    score_cards::Column::HoleThree,
                    score_cards::Column::HoleFour,
                    score_cards::Column::HoleFive,
                    score_cards::Column::HoleSix,
                    score_cards::Column::HoleSeven,
                    score_cards::Column::HoleEight,
                    score_cards::Column::HoleNine,
                    score_cards::Column::Score,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

pub async fn delete_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = score_cards::Entity::delete_by_id(name.to_string())
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    let result = score_cards::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn list_all<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<score_cards::Model>, sea_orm::DbErr> {
    score_cards::Entity::find()
        .order_by_asc(score_cards::Column::Name)
        .all(conn)
        .await
}

impl From<score_cards::Model> for ScoreCard {
    fn from(model: score_cards::Model) -> Self {
        let holes = model.holes();
        let card = ScoreCard::from_holes(model.name, holes);
        if card.total() != model.score {
            // Stored total is advisory; the holes win.
            warn!(
                player = card.name(),
                stored = model.score,
                derived = card.total(),
                "score_cards.total_mismatch"
            );
        }
        card
    }
}

/// SeaORM implementation of ScoreCardRepo.
#[derive(Debug, Clone)]
pub struct ScoreCardRepoSea {
    db: DatabaseConnection,
}

impl ScoreCardRepoSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreCardRepo for ScoreCardRepoSea {
    async fn find_by_name(&self, name: &str) -> Result<Option<ScoreCard>, DomainError> {
        let row = find_by_name(&self.db, name).await?;
        Ok(row.map(ScoreCard::from))
    }

    async fn save(&self, card: &ScoreCard) -> Result<(), DomainError> {
        upsert(&self.db, ScoreCardUpsert::from(card)).await?;
        Ok(())
    }

    async fn insert(&self, card: &ScoreCard) -> Result<(), DomainError> {
        insert(&self.db, ScoreCardUpsert::from(card)).await?;
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(delete_by_name(&self.db, name).await? > 0)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        Ok(delete_all(&self.db).await?)
    }

    async fn list_all(&self) -> Result<Vec<ScoreCard>, DomainError> {
        let rows = list_all(&self.db).await?;
        Ok(rows.into_iter().map(ScoreCard::from).collect())
    }
}
