pub mod auth;
pub mod caregivers;
pub mod medications;
