//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Owns the rendered-page cache and the invalidation subscriber that
//!   evicts stale routes after content changes.

pub mod errors;
pub mod cache;
pub mod invalidation;
#[cfg(test)]
pub mod test_support;
pub mod service_item_service;
pub mod working_process_service;
pub mod team_member_service;
pub mod testimonial_service;
pub mod case_study_service;
