pub use super::game::Entity as Game;
pub use super::user::Entity as User;
