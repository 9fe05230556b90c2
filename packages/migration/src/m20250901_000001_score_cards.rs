use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ScoreCards {
    Table,
    Name,
    HoleOne,
    HoleTwo,
    HoleThree,
    HoleFour,
    HoleFive,
    HoleSix,
    HoleSeven,
    HoleEight,
    HoleNine,
    Score,
}

/// Hole columns in play order; index N is hole N+1.
const HOLE_COLUMNS: [ScoreCards; 9] = [
    ScoreCards::HoleOne,
    ScoreCards::HoleTwo,
    ScoreCards::HoleThree,
    ScoreCards::HoleFour,
    ScoreCards::HoleFive,
    ScoreCards::HoleSix,
    ScoreCards::HoleSeven,
    ScoreCards::HoleEight,
    ScoreCards::HoleNine,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(ScoreCards::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ScoreCards::Name)
                    .string_len(64)
                    .not_null()
                    .primary_key(),
            );

        for hole in HOLE_COLUMNS {
            table.col(ColumnDef::new(hole).integer().not_null().default(0));
        }

        // Derived total, rewritten on every save
        table.col(
            ColumnDef::new(ScoreCards::Score)
                .integer()
                .not_null()
                .default(0),
        );

        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_score_cards_score")
                    .table(ScoreCards::Table)
                    .col(ScoreCards::Score)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_score_cards_score")
                    .table(ScoreCards::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScoreCards::Table).to_owned())
            .await
    }
}
