pub mod config;
pub mod constants;
pub mod entries;
pub mod geometry;
pub mod session;
pub mod shared_wheel_game;
pub mod validation;

pub use config::{SpinSettings, WheelConfig, WheelVariant};
pub use entries::EntryList;
pub use session::{SessionError, WheelSession};
pub use shared_wheel_game::{SpinController, SpinPhase, SpinRejected, SpinTicket};
