//! Store access
//!
//! Every request opens its own connection to the SQLite file and closes it
//! before the response is written. Nothing is pooled across requests.

mod store;

pub use store::Store;
