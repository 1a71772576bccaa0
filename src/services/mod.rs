pub mod api_client;
pub mod auth_service;
pub mod token_storage;
pub mod transport;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::{fetch_current_user, perform_login, LoginError, GENERIC_LOGIN_ERROR};
pub use token_storage::CredentialStore;
pub use transport::{ApiRequest, ApiResponse, FetchTransport, HttpMethod, Transport, TransportError};
