use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "score_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(column_name = "hole_one")]
    pub hole_one: i32,
    #[sea_orm(column_name = "hole_two")]
    pub hole_two: i32,
    #[sea_orm(column_name = "hole_three")]
    pub hole_three: i32,
    #[sea_orm(column_name = "hole_four")]
    pub hole_four: i32,
    #[sea_orm(column_name = "hole_five")]
    pub hole_five: i32,
    #[sea_orm(column_name = "hole_six")]
    pub hole_six: i32,
    #[sea_orm(column_name = "hole_seven")]
    pub hole_seven: i32,
    #[sea_orm(column_name = "hole_eight")]
    pub hole_eight: i32,
    #[sea_orm(column_name = "hole_nine")]
    pub hole_nine: i32,
    /// Total across the nine holes
    pub score: i32,
}

impl Model {
    pub fn holes(&self) -> [i32; 9] {
        [
            self.hole_one,
            self.hole_two,
            self.hole_three,
            self.hole_four,
            self.hole_five,
            self.hole_six,
            self.hole_seven,
            self.hole_eight,
            self.hole_nine,
        ]
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
