// Application settings
pub mod logging;
pub mod settings;

pub use logging::LoggingSettings;
pub use settings::AppSettings;
