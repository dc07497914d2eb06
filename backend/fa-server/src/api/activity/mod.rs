pub mod activity;
pub mod activity_dto;
pub mod activity_list_response;
pub mod activity_response;
pub mod create_activity_request;
pub mod list_activity_query;
