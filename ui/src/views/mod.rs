mod academy;
mod analytics;
mod crm;
mod home;
mod login;
mod logistics;

pub use academy::Academy;
pub use analytics::Analytics;
pub use crm::Crm;
pub use home::Home;
pub use login::Login;
pub use logistics::Logistics;
