pub mod domain;
pub mod factory;
pub mod repository;
pub mod validator;
