//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod notification_port;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use notification_port::{NotificationLevel, NotificationPort};
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use notification_port::MockNotificationPort;
#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
