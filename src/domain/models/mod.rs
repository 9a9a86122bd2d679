pub mod booking;
pub mod business;
pub mod schedule;
pub mod service;
pub mod special_day;
