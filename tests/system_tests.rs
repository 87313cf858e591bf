// Whole-system scenarios: small programs run through the assembled
// CPU + bus + PPU, observed only through the public surfaces.

use mochi::gameboy::GameBoy;
use mochi::ppu::{DOTS_PER_FRAME, FramePresenter, LCD_HEIGHT, LCD_WIDTH};

/// Keeps a copy of the most recent frame.
struct CapturePresenter {
    frames: usize,
    last: Vec<u8>,
}

impl CapturePresenter {
    fn new() -> Self {
        CapturePresenter {
            frames: 0,
            last: Vec::new(),
        }
    }
}

impl FramePresenter for CapturePresenter {
    fn present(&mut self, frame: &[u8], width: usize, height: usize) {
        assert_eq!(width, LCD_WIDTH);
        assert_eq!(height, LCD_HEIGHT);
        self.frames += 1;
        self.last = frame.to_vec();
    }
}

#[test]
fn program_draws_a_tile_through_the_full_stack() {
    // Writes one tile row into VRAM, programs the palette and LCD
    // control, then spins while the PPU scans out the frame.
    let program = [
        0x3E, 0x3C, // LD A, 0x3C
        0xEA, 0x00, 0x80, // LD (0x8000), A
        0x3E, 0x7E, // LD A, 0x7E
        0xEA, 0x01, 0x80, // LD (0x8001), A
        0x3E, 0xE4, // LD A, 0xE4      identity palette
        0xE0, 0x47, // LDH (0x47), A
        0x3E, 0x91, // LD A, 0x91      lcd + bg on, unsigned tiles
        0xE0, 0x40, // LDH (0x40), A
        0x18, 0xFE, // JR -2
    ];
    let mut gb = GameBoy::new();
    gb.load_rom(&program);

    let mut presenter = CapturePresenter::new();
    gb.run_frame(&mut presenter);

    assert_eq!(presenter.frames, 1);
    let frame = &presenter.last;
    // The tile map holds zeros, so tile 0's first row repeats across the
    // whole top scanline.
    assert_eq!(&frame[0..8], &[0, 2, 3, 3, 3, 3, 2, 0]);
    assert_eq!(&frame[8..16], &[0, 2, 3, 3, 3, 3, 2, 0]);
    // Rows 1-7 of tile 0 were never written
    assert!(frame[LCD_WIDTH..2 * LCD_WIDTH].iter().all(|&p| p == 0));
}

#[test]
fn frames_tick_at_the_documented_rate() {
    let mut gb = GameBoy::new();
    gb.load_rom(&[0x18, 0xFE]); // JR -2, 12 dots per pass

    let mut presenter = CapturePresenter::new();
    for _ in 0..10 {
        let elapsed = gb.run_frame(&mut presenter);
        assert_eq!(elapsed, DOTS_PER_FRAME);
    }

    assert_eq!(presenter.frames, 10, "one presentation per VBlank entry");
    assert_eq!(gb.bus.ppu.frames(), 10);
    assert_eq!(gb.cpu.total_dots(), 10 * DOTS_PER_FRAME as u64);
    assert_eq!(gb.bus.ppu.scanline(), 0, "LY back at the top of the frame");
}

#[test]
fn program_can_wait_for_vblank_by_polling_ly() {
    // The classic wait-for-VBlank idiom: poll LY until it reads 144.
    let program = [
        0xF0, 0x44, // loop: LDH A, (0x44)
        0xFE, 0x90, //       CP 144
        0x20, 0xFA, //       JR NZ, loop
        0x76, //             HALT
    ];
    let mut gb = GameBoy::new();
    gb.load_rom(&program);

    let mut presenter = CapturePresenter::new();
    gb.run_frame(&mut presenter);

    assert!(gb.cpu.halted, "the poll loop saw LY reach the VBlank range");
    assert_eq!(presenter.frames, 1);
}

#[test]
fn boot_fixture_is_visible_to_programs() {
    let program = [
        0xFA, 0x04, 0x01, // LD A, (0x0104)
        0x76, // HALT
    ];
    let mut gb = GameBoy::new();
    gb.load_rom(&program);
    gb.bus.seed_boot_fixture();

    gb.cpu.step(&mut gb.bus);
    assert_eq!(gb.cpu.a, 0xCE, "first logo byte");
}

#[test]
fn echo_ram_aliasing_observed_from_code() {
    let program = [
        0x3E, 0x5C, // LD A, 0x5C
        0xEA, 0x34, 0xC0, // LD (0xC034), A
        0xFA, 0x34, 0xE0, // LD A, (0xE034)
        0x76, // HALT
    ];
    let mut gb = GameBoy::new();
    gb.load_rom(&program);

    for _ in 0..3 {
        gb.cpu.step(&mut gb.bus);
    }
    assert_eq!(gb.cpu.a, 0x5C, "the echo region reads the WRAM byte back");
}

#[test]
fn scrolled_background_lands_where_the_registers_point() {
    // Paint tile 0 row 0 solid, then scroll two pixels horizontally.
    let program = [
        0x3E, 0xFF, // LD A, 0xFF
        0xEA, 0x00, 0x80, // LD (0x8000), A
        0xEA, 0x01, 0x80, // LD (0x8001), A
        0x3E, 0xE4, // LD A, 0xE4
        0xE0, 0x47, // LDH (0x47), A
        0x3E, 0x02, // LD A, 2
        0xE0, 0x43, // LDH (0x43), A   SCX = 2
        0x3E, 0x91, // LD A, 0x91
        0xE0, 0x40, // LDH (0x40), A
        0x18, 0xFE, // JR -2
    ];
    let mut gb = GameBoy::new();
    gb.load_rom(&program);

    let mut presenter = CapturePresenter::new();
    gb.run_frame(&mut presenter);

    // Every pixel of the row is index 3 regardless of scroll, and the
    // register round-trips through the bus.
    assert_eq!(gb.bus.ppu.scx(), 2);
    assert!(presenter.last[0..LCD_WIDTH].iter().all(|&p| p == 3));
    assert!(presenter.last[LCD_WIDTH..2 * LCD_WIDTH].iter().all(|&p| p == 0));
}
