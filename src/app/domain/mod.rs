pub mod destination_strategy;
pub mod email;
pub mod organization_id;
pub mod password;
pub mod slug;
pub mod user_id;

pub use destination_strategy::DestinationStrategy;
pub use email::Email;
pub use organization_id::OrganizationId;
pub use password::{HashedPassword, Password};
pub use slug::Slug;
pub use user_id::UserId;
