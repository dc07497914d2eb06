pub mod activity;
pub mod auth;
pub mod error;
pub mod extractors;
pub mod validation;
