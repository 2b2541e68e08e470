//! Infrastructure adapters for the client ports.

pub mod http_client;
pub mod notifier;

pub use http_client::HttpApiClient;
pub use notifier::TracingNotifier;
