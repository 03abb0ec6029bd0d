pub mod use_fullscreen;

pub use use_fullscreen::*;
