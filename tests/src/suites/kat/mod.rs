//! Re-export the public surface so callers can do
//! `use hashkit_tests::suites::kat::*;`.

pub mod model;
pub mod error;
pub mod dispatcher;

pub use model::*;
pub use loader::*;
pub use runner::*;
pub use error::*;
