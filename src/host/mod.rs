//! Hosting configuration shared with handlers under test.

pub mod configuration;

pub use configuration::HostConfiguration;
