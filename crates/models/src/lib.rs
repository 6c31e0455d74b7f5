pub mod errors;
pub mod db;
pub mod service_item;
pub mod working_process;
pub mod team_member;
pub mod testimonial;
pub mod case_study;
