pub mod member;
pub mod payment;
pub mod user;
