//! Shared types for the washing-test report forms: field schema, report-type
//! registry, form state and the wire DTOs used by backend and frontend.

pub mod domain;
pub mod enums;
pub mod shared;
