pub mod layout;
pub mod material;
pub mod piston;
pub mod press_state;

pub use layout::SceneLayout;
pub use material::{CaptionStyle, ForceBands, ForceTier, Material};
pub use piston::Piston;
pub use press_state::{DriveMode, PressState};
