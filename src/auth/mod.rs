// Bearer token verification for the acting user

pub mod jwt;
