//! Service-account authentication: credential loading, signed-assertion
//! token exchange, and the refresh coordinator.

pub mod coordinator;
pub mod credentials;
pub mod exchanger;

pub use coordinator::AuthCoordinator;
pub use exchanger::{JwtBearerExchanger, TokenExchanger};
