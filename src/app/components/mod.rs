pub mod button;
pub mod card;
pub mod common;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyState, ErrorMessage, LoadingText, StatusMessage};
