pub mod activity_log_writer;
pub mod descriptor_store;
pub mod enrolled_descriptor;
