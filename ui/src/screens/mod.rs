// This file makes the view modules available to the rest of the application.

pub mod sign_in;
pub mod sign_up;
