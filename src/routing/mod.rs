//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Setup phase:
//!     ControllerDescriptor / AttributeRoute
//!     → descriptor.rs / attribute.rs (derive name + template + defaults)
//!     → template.rs (parse)
//!     → table.rs (insert by name, last write wins)
//!
//! Dispatch phase:
//!     request path
//!     → fallback Route (constructor template)
//!     → RouteTable::match_path (first match wins)
//!     → RouteData, or RouteData::unmatched
//! ```
//!
//! # Design Decisions
//! - Routes are only mutated during setup; dispatch reads a snapshot
//! - Deterministic: same input always matches same route
//! - A routing miss is not an error

pub mod attribute;
pub mod descriptor;
pub mod route;
pub mod table;
pub mod template;

pub use attribute::{AttributeRoute, AttributeRouteSource};
pub use descriptor::ControllerDescriptor;
pub use route::{Route, RouteData, RouteDefaults, RouteValue};
pub use table::RouteTable;
pub use template::{RouteTemplate, Segment};
