//! Shared types for list and write endpoints.

mod pagination;
mod response;

pub use pagination::{Direction, DoctorSummaryPage, Page, PageParams, PageRequest, Sort};
pub use response::{Created, NoContent};
