pub mod auth;

pub use auth::{ApiErrorBody, LoginRequest, LoginResponse, UserProfile};
