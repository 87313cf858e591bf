use crate::cpu::Cpu;
use crate::memory_bus::MemoryBus;
use crate::ppu::{DOTS_PER_FRAME, FramePresenter, LCD_HEIGHT, LCD_WIDTH};

/// The assembled system: the CPU drives the bus, the bus owns the PPU and
/// the shared dot counter.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: MemoryBus,
}

impl GameBoy {
    pub fn new() -> Self {
        GameBoy {
            cpu: Cpu::new(),
            bus: MemoryBus::new(),
        }
    }

    /// Copies the ROM image into the bus. The caller supplies raw bytes;
    /// file handling stays outside the core.
    pub fn load_rom(&mut self, rom_data: &[u8]) {
        self.bus.load_rom(rom_data);
    }

    /// Emulates one video frame: zero the dot counter, then alternate CPU
    /// step and PPU advance until at least 70,224 dots have elapsed.
    /// Finished frames are handed to the presenter as VBlank entries
    /// occur. Returns the dots actually consumed (the last instruction
    /// may run a few dots past the frame boundary).
    pub fn run_frame(&mut self, presenter: &mut dyn FramePresenter) -> u32 {
        self.bus.reset_dots();
        let mut elapsed: u32 = 0;

        while elapsed < DOTS_PER_FRAME {
            let consumed = self.cpu.step(&mut self.bus);
            self.bus.ppu.advance(consumed);
            if let Some(frame) = self.bus.ppu.take_frame() {
                presenter.present(frame, LCD_WIDTH, LCD_HEIGHT);
            }
            elapsed += consumed;
        }

        elapsed
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingPresenter {
        frames: usize,
        last_dims: (usize, usize),
    }

    impl FramePresenter for CountingPresenter {
        fn present(&mut self, frame: &[u8], width: usize, height: usize) {
            assert_eq!(frame.len(), width * height);
            self.frames += 1;
            self.last_dims = (width, height);
        }
    }

    #[test]
    fn run_frame_presents_exactly_once_per_call() {
        let mut gb = GameBoy::new();
        // JR -2 spins in place at 12 dots per pass; 70,224 / 12 divides
        // evenly, so every frame lands exactly on the boundary.
        gb.load_rom(&[0x18, 0xFE]);

        let mut presenter = CountingPresenter {
            frames: 0,
            last_dims: (0, 0),
        };
        for frame in 1..=5 {
            let elapsed = gb.run_frame(&mut presenter);
            assert_eq!(elapsed, DOTS_PER_FRAME);
            assert_eq!(presenter.frames, frame);
        }
        assert_eq!(presenter.last_dims, (LCD_WIDTH, LCD_HEIGHT));
        assert_eq!(gb.bus.ppu.frames(), 5);
    }

    #[test]
    fn halted_cpu_still_produces_frames() {
        let mut gb = GameBoy::new();
        gb.load_rom(&[0x76]); // HALT

        let mut presenter = CountingPresenter {
            frames: 0,
            last_dims: (0, 0),
        };
        gb.run_frame(&mut presenter);
        assert!(gb.cpu.halted);
        assert_eq!(presenter.frames, 1, "the frame clock keeps running");
    }
}
