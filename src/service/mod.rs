pub mod extra;
pub mod password;
pub mod profile_store;
