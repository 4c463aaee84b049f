// User domain module

#![allow(clippy::module_inception)]

pub mod user;

pub use user::User;
