//! Support code that is not presentation: on-disk session storage.

pub mod session_store;
