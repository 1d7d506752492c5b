use pretty_assertions::assert_eq;

use chipvm_core::constants::KEY_COUNT;
use chipvm_core::{Chip8, Event, Fault};

fn boot(rom: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_seed(0x5EED);
    chip8.load_rom(rom).unwrap();
    chip8
}

#[test]
fn load_and_add() {
    // LD V0, 10; ADD V0, 5
    let mut chip8 = boot(&[0x60, 0x0A, 0x70, 0x05]);
    chip8.step();
    chip8.step();
    assert_eq!(chip8.state().v[0x0], 15);
    assert_eq!(chip8.state().pc, 0x204);
}

#[test]
fn oversized_rom_is_rejected() {
    let mut chip8 = Chip8::with_seed(0);
    assert!(chip8.load_rom(&[0; 4096 - 0x200]).is_ok());
    let err = chip8.load_rom(&[0; 4096 - 0x200 + 1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ROM is 3585 bytes but only 3584 bytes of program memory are available"
    );
}

#[test]
fn call_then_return_resumes_after_call() {
    // 0x200 CALL 0x206
    // 0x202 LD V1, 1
    // 0x204 JP 0x204
    // 0x206 LD V2, 2
    // 0x208 RET
    let mut chip8 = boot(&[0x22, 0x06, 0x61, 0x01, 0x12, 0x04, 0x62, 0x02, 0x00, 0xEE]);
    chip8.step();
    assert_eq!(chip8.state().pc, 0x206);
    assert_eq!(chip8.state().stack.sp(), 1);
    chip8.step();
    chip8.step();
    assert_eq!(chip8.state().pc, 0x202);
    assert_eq!(chip8.state().stack.sp(), 0);
    chip8.step();
    assert_eq!(chip8.state().v[0x1], 1);
    assert_eq!(chip8.state().v[0x2], 2);
}

#[test]
fn runaway_recursion_faults_instead_of_wrapping() {
    // 0x200 CALL 0x200
    let mut chip8 = boot(&[0x22, 0x00]);
    for _ in 0..16 {
        assert_eq!(chip8.step(), None);
    }
    assert_eq!(
        chip8.step(),
        Some(Event::Fault(Fault::StackOverflow { pc: 0x200 }))
    );
    assert_eq!(chip8.state().stack.sp(), 16);
    assert_eq!(chip8.state().pc, 0x202);
}

#[test]
fn wait_for_key_stalls_until_pressed() {
    // LD V3, K; LD V4, 0x44
    let mut chip8 = boot(&[0xF3, 0x0A, 0x64, 0x44]);
    for _ in 0..10 {
        chip8.step();
        assert_eq!(chip8.state().pc, 0x200);
    }

    let mut keys = [false; KEY_COUNT];
    keys[0x9] = true;
    keys[0xC] = true;
    chip8.set_keys(keys);
    chip8.step();
    assert_eq!(chip8.state().v[0x3], 0x9);
    assert_eq!(chip8.state().pc, 0x202);
    chip8.step();
    assert_eq!(chip8.state().v[0x4], 0x44);
}

#[test]
fn drawing_a_glyph_twice_erases_it() {
    // LD V0, 0xA; LD F, V0; DRW V1, V2, 5; DRW V1, V2, 5
    let mut chip8 = boot(&[0x60, 0x0A, 0xF0, 0x29, 0xD1, 0x25, 0xD1, 0x25]);
    chip8.step();
    chip8.step();
    assert_eq!(chip8.step(), Some(Event::DisplayDirty));
    assert_eq!(chip8.state().v[0xF], 0);
    assert!(!chip8.frame_buffer().is_blank());
    assert!(chip8.take_frame().is_some());

    assert_eq!(chip8.step(), Some(Event::DisplayDirty));
    assert_eq!(chip8.state().v[0xF], 1);
    let frame = chip8.take_frame().unwrap();
    assert!(frame.is_blank());
}

#[test]
fn delay_timer_runs_at_tick_rate() {
    // LD V0, 60; LD DT, V0; LD V1, DT
    let mut chip8 = boot(&[0x60, 60, 0xF0, 0x15, 0xF1, 0x07]);
    chip8.step();
    chip8.step();
    for _ in 0..59 {
        chip8.tick();
    }
    assert_eq!(chip8.state().timers.delay, 1);
    chip8.tick();
    chip8.tick();
    assert_eq!(chip8.state().timers.delay, 0);
    chip8.step();
    assert_eq!(chip8.state().v[0x1], 0);
}

#[test]
fn bcd_of_a_register_reads_back() {
    // LD V5, 254; LD I, 0x300; LD B, V5; LD V2, [I]
    let mut chip8 = boot(&[0x65, 0xFE, 0xA3, 0x00, 0xF5, 0x33, 0xF2, 0x65]);
    for _ in 0..4 {
        chip8.step();
    }
    assert_eq!(&chip8.state().v[0x0..0x3], &[2, 5, 4]);
}

#[test]
fn seeded_machines_agree() {
    // RND V0, 0xFF; JP 0x200
    let rom = [0xC0, 0xFF, 0x12, 0x00];
    let mut a = boot(&rom);
    let mut b = boot(&rom);
    for _ in 0..20 {
        a.step();
        b.step();
        assert_eq!(a.state().v[0x0], b.state().v[0x0]);
    }
}
