mod activity;
mod error;
mod validation;
