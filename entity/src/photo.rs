use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub url: String,
    pub bird_id: i32,
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
