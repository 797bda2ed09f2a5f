pub mod activations;
pub mod agents;
pub mod districts;
pub mod organizations;
pub mod profiles;
pub mod sessions;
pub mod tracked_links;
pub mod users;
pub mod zones;

pub use users::{find_by_email, NewUser, User};
