use std::{env, thread, time::Instant};

// Declare modules located within the src/app/ directory
mod constants;

use mochi::gameboy::GameBoy;
use mochi::ppu::FramePresenter;

/// Console stand-in for a blit layer: counts frames and prints a status
/// line now and then. A real front-end would copy the shades to a texture.
struct ConsolePresenter {
    frames: u64,
}

impl FramePresenter for ConsolePresenter {
    fn present(&mut self, frame: &[u8], width: usize, height: usize) {
        self.frames += 1;
        if self.frames % constants::STATUS_EVERY_FRAMES == 0 {
            let lit = frame.iter().filter(|&&shade| shade != 0).count();
            println!(
                "frame {}: {}x{}, {} non-black pixels",
                self.frames, width, height, lit
            );
        }
    }
}

fn main() -> Result<(), String> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_path>", args[0]);
        std::process::exit(1);
    }
    let rom_path = &args[1];

    // --- Load ROM ---
    let rom_data = std::fs::read(rom_path)
        .map_err(|e| format!("Failed to read ROM '{}': {}", rom_path, e))?;
    println!("Loading ROM: {} ({} bytes)", rom_path, rom_data.len());

    // --- Setup Emulator ---
    let mut gameboy = GameBoy::new();
    gameboy.load_rom(&rom_data);

    let mut presenter = ConsolePresenter { frames: 0 };

    // --- Main Loop ---
    // Runs until shut down externally.
    println!("Starting main loop...");
    loop {
        let frame_start_time = Instant::now();

        gameboy.run_frame(&mut presenter);

        // Pace to real DMG speed
        let elapsed_time = frame_start_time.elapsed();
        if elapsed_time < constants::TARGET_FRAME_DURATION {
            thread::sleep(constants::TARGET_FRAME_DURATION - elapsed_time);
        }
    }
}
