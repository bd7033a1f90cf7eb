pub mod auth;
pub mod dashboard;
pub mod health;
pub mod member;
pub mod payment;
pub mod report;
