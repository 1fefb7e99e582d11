pub mod auth;
pub mod hirer_dashboard;
pub mod landing;
pub mod not_found;
pub mod seeker_dashboard;
pub mod thank_you;
