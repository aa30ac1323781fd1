//! Configuration and parameters
//!
//! System settings, press behaviour and the settings file.

pub mod press_params;
pub mod settings_store;
pub mod system_settings;

pub use press_params::*;
pub use settings_store::*;
pub use system_settings::*;
