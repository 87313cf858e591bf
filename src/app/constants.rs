use std::time::Duration;

// One frame is 70,224 dots at 4,194,304 Hz, a little under 59.73 Hz.
pub const TARGET_FRAME_DURATION: Duration = Duration::from_nanos(16_742_706);

// How often the console presenter prints a status line.
pub const STATUS_EVERY_FRAMES: u64 = 600;
