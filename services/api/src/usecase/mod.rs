pub mod access;
pub mod cart;
pub mod menu;
pub mod payment;
pub mod review;
pub mod stats;
pub mod token;
pub mod user;
