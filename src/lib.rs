pub mod config;
pub mod db;
pub mod error;
pub mod service;

pub use config::Config;
pub use db::{NewProfile, Profile, ProfileExtra};
pub use error::ProfileError;
pub use service::extra::{filter_extra, valid_field_names};
pub use service::profile_store::{AuthOutcome, ProfileStore};
