pub use super::bird::Entity as Bird;
pub use super::egg::Entity as Egg;
pub use super::pair::Entity as Pair;
pub use super::production::Entity as Production;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
