mod bird;
mod dashboard;
mod egg;
mod pair;
mod production;
mod transaction;
mod user;
