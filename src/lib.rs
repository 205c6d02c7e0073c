pub mod configuration;
pub mod domain;
pub mod services;
pub mod startup;
