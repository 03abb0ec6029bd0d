pub const DEFAULT_NAMES: [&str; 4] = ["Alice", "Brandon", "Charlotte", "Dylan"];

pub const SPIN_DURATION_MS: u32 = 4500;
pub const ANNOUNCE_DELAY_MS: u32 = 400;
pub const MIN_TURNS: u32 = 5;
pub const MAX_TURNS: u32 = 9;
pub const LANDING_JITTER: f64 = 0.35;
pub const POINTER_ANGLE_DEG: f64 = 0.0;

pub const GOLDEN_ANGLE_DEG: f64 = 137.508;
pub const SEGMENT_SATURATION: u8 = 85;
pub const SEGMENT_LIGHTNESS: u8 = 55;
pub const NEUTRAL_SEGMENT_COLOR: &str = "#1e293b";

// Keeps a single-entry label arc from collapsing into a zero-length path.
pub const ARC_EPSILON_DEG: f64 = 0.01;

pub const EMPTY_ENTRY_CODE: &str = "empty_entry";
pub const DUPLICATE_ENTRY_CODE: &str = "duplicate_entry";

pub const DEFAULT_TITLE: &str = "Cumorah Wheel";
pub const DEFAULT_TAGLINE: &str = "Add participants, spin the wheel, and pick a winner.";
