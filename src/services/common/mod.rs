//! Common utilities shared by services

/// Reactive values published to the hosting UI
pub mod property;

pub use property::Property;
