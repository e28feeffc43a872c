//! Session core: store, authenticator, route guard and the axum extractors
//! that apply the guard to requests.

pub mod authenticator;
pub mod credentials;
pub mod guard;
pub mod middleware;
pub mod store;
pub mod token;

pub use authenticator::Authenticator;
pub use credentials::{CredentialRepository, StaticCredentials};
pub use guard::{evaluate, Area, GuardDecision};
pub use middleware::{AdminSession, AppState, UserSession};
pub use store::SessionStore;
pub use token::generate_session_token;
