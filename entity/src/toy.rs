use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "toy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub color: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bird_toy::Entity")]
    BirdToy,
}

impl Related<super::bird_toy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BirdToy.def()
    }
}

impl Related<super::bird::Entity> for Entity {
    fn to() -> RelationDef {
        super::bird_toy::Relation::Bird.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::bird_toy::Relation::Toy.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
