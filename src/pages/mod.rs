pub mod chat;
pub mod not_found;
pub mod settings;
pub mod upload;

// Re-export so they can be used as `pages::Chat`
pub use chat::Chat;
pub use not_found::PageNotFound;
pub use settings::Settings;
pub use upload::Upload;
