pub mod channels;
pub mod home;
pub mod not_found;

pub use channels::Channels;
pub use home::Home;
pub use not_found::NotFound;
