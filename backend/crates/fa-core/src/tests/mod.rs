mod matcher;
mod models;
