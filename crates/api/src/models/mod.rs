//! Document models for the service collections.
//!
//! Each stored document carries its MongoDB `_id` as `Option<ObjectId>`;
//! the option is `None` until the store assigns one on insert. Wire field
//! names are camelCase to match the collections as they exist.
//!
//! Account collections are modelled twice: a full record type used for
//! credential checks on insert/login, and a view type without the password
//! hash used everywhere a document leaves the service.

pub mod admin;
pub mod category;
pub mod feedback;
pub mod payment;
pub mod product;
pub mod user;

pub use admin::AdminRecord;
pub use category::Category;
pub use feedback::Feedback;
pub use payment::Payment;
pub use product::Product;
pub use user::{User, UserRecord};
