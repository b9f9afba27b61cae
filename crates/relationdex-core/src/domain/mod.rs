pub mod contact;
pub mod frequency;
pub mod ids;
pub mod interaction;
pub mod name;

pub use contact::{Contact, ContactNew};
pub use frequency::FrequencyDays;
pub use ids::ContactId;
pub use interaction::InteractionKind;
pub use name::ContactName;
