pub mod availability;
pub mod booking;
pub mod booking_management;
pub mod business;
pub mod health;
pub mod schedule;
pub mod service;
pub mod special_day;
