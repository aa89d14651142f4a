// Domain model module entry point
// Seed catalog data, faculty and user repositories, password hashing

pub mod catalog;
pub mod faculty;
pub mod password;
pub mod users;
