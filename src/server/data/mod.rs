//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one domain each and return domain models, keeping
//! entity types out of the service layer. Every repository is generic over `ConnectionTrait`
//! so the same queries run against the pool or inside an open transaction.

pub mod bird;
pub mod dashboard;
pub mod egg;
pub mod pair;
pub mod production;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
