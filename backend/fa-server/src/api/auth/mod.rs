pub mod auth;
pub mod auth_response;
pub mod face_login_request;
pub mod login_request;
pub mod me_response;
pub mod register_request;
pub mod user_dto;
