pub mod auth_rate_limiter;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod password;
pub mod rate_limit_config;

pub use auth_rate_limiter::AuthRateLimiter;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
