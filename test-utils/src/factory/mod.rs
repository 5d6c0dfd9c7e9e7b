//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` shorthand that
//! inserts a row with defaults. Foreign keys are enforced by SQLite, so parents (user,
//! pair, production) must be created first; `helpers` bundles the common chains.
//!
//! ```rust,ignore
//! let user = factory::create_user(&db).await?;
//! let sire = factory::bird::BirdFactory::new(&db, user.id)
//!     .gender(Gender::Male)
//!     .build()
//!     .await?;
//! let (sire, dam, pair, production) = factory::helpers::create_active_pair(&db, user.id).await?;
//! ```

pub mod bird;
pub mod egg;
pub mod helpers;
pub mod pair;
pub mod production;
pub mod transaction;
pub mod user;

pub use bird::create_bird;
pub use egg::create_egg;
pub use pair::create_pair;
pub use production::create_production;
pub use transaction::create_transaction;
pub use user::create_user;
