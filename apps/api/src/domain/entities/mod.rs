pub mod analysis_type;
pub mod service;
pub mod waitlist_email;
