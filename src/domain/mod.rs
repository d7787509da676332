//! Read-only entity models consumed by the advisor engine.

pub mod account;
pub mod budget;
pub mod card;
pub mod category;
pub mod common;
pub mod goal;
pub mod invoice;
pub mod subscription;
pub mod transaction;

pub use account::Account;
pub use budget::Budget;
pub use card::Card;
pub use category::{Category, CategoryKind};
pub use common::{find_by_id, Identifiable, NamedEntity};
pub use goal::Goal;
pub use invoice::{Invoice, InvoiceStatus};
pub use subscription::Subscription;
pub use transaction::{Transaction, TransactionKind};
