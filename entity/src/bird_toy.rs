use sea_orm::entity::prelude::*;

/// Join row linking a bird to a toy. The composite key rules out duplicate pairs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bird_toy")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bird_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub toy_id: i32,
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
    #[sea_orm(
        belongs_to = "super::toy::Entity",
        from = "Column::ToyId",
        to = "super::toy::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Toy,
}

impl Related<super::bird::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bird.def()
    }
}

impl Related<super::toy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Toy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
