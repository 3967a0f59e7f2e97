//! Types shared between the dashboard backend and the browser frontend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
