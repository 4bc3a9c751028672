//! Bearer-token authentication types shared by the Bistro API.

pub mod bearer;
pub mod token;
