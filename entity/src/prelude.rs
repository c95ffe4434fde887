pub use super::bird::Entity as Bird;
pub use super::bird_toy::Entity as BirdToy;
pub use super::feeding::Entity as Feeding;
pub use super::photo::Entity as Photo;
pub use super::toy::Entity as Toy;
pub use super::user::Entity as User;
