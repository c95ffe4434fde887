use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feeding")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub meal: Meal,
    pub bird_id: i32,
}

/// Meal served at a feeding, stored as its single-letter code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Meal {
    #[sea_orm(string_value = "B")]
    Breakfast,
    #[sea_orm(string_value = "L")]
    Lunch,
    #[sea_orm(string_value = "D")]
    Dinner,
    #[sea_orm(string_value = "S")]
    Snack,
}

impl Meal {
    /// Meals in the order they are offered on the feeding form.
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    pub fn code(&self) -> &'static str {
        match self {
            Meal::Breakfast => "B",
            Meal::Lunch => "L",
            Meal::Dinner => "D",
            Meal::Snack => "S",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snack => "Snack",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.code() == code)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bird::Entity",
        from = "Column::BirdId",
        to = "super::bird::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bird,
}

impl Related<super::bird::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bird.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
