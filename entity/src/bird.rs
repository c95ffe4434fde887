use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bird")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::feeding::Entity")]
    Feeding,
    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
    #[sea_orm(has_many = "super::bird_toy::Entity")]
    BirdToy,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::feeding::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feeding.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl Related<super::bird_toy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BirdToy.def()
    }
}

/// Birds reach their toys through the `bird_toy` join table.
impl Related<super::toy::Entity> for Entity {
    fn to() -> RelationDef {
        super::bird_toy::Relation::Toy.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::bird_toy::Relation::Bird.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
