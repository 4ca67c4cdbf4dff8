// Re-export wire types so they are reachable via trafficform_core::*
pub use trafficform_protocol::kind;
pub use trafficform_protocol::payload;

pub mod collector;
pub mod config;
pub mod divider;
pub mod error;
pub mod pipeline;
pub mod profiles;
pub mod shaper;
pub mod submitter;
pub mod validator;
