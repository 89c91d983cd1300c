// Service exports
pub mod auth;
pub mod catalog;

pub use auth::{AgentIdentity, AuthError, ConfiguredIdentityProvider, IdentityProvider, Session, SessionManager};
pub use catalog::{Catalog, CatalogError};
