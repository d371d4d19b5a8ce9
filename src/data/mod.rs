//! Repositories over the sea-orm row store.
//!
//! One repository per table, borrowing the shared [`sea_orm::DatabaseConnection`].
//! Repositories return [`sea_orm::DbErr`] untouched; precondition checks and
//! game rules live in the service layer.

pub mod character;
pub mod history;
pub mod relic;
pub mod template;
pub mod user;

pub use character::CharacterRepository;
pub use history::HistoryRepository;
pub use relic::RelicRepository;
pub use template::TemplateRepository;
pub use user::UserRepository;
