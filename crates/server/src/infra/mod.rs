//! Infrastructure concerns (database connection).

mod db;

pub use db::Database;
