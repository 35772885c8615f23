pub mod app_error;
pub mod email_viewer;
pub mod use_cases;
pub mod validators;
