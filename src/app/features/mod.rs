pub mod activations;
pub mod agents;
pub mod auth;
pub mod districts;
pub mod helpers;
pub mod links;
pub mod organization;
pub mod redirect;
pub mod zones;
