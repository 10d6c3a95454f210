pub mod booking;
pub mod load;
pub mod profile;
pub mod route;
