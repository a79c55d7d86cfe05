//! Counter demo for an Arduino Uno driving two chained 74HC595s.
//!
//! Wiring: SER on d10, RCLK on d11, SRCLK on d12, /OE on d9.
#![no_std]
#![no_main]
use panic_halt as _;

use arduino_hal::port::{mode, Pin};
use sipo_shift::{Line, ShiftRegister};
use ufmt::uwriteln;

const BIT_LENGTH: usize = 16;

type BoardLine = Line<Pin<mode::Output>>;

#[arduino_hal::entry]
fn main() -> ! {
    let peripherals = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(peripherals);
    let mut serial = arduino_hal::default_serial!(peripherals, pins, 57600);

    uwriteln!(&mut serial, "shift register counter, {} bits\r", BIT_LENGTH).ok();

    let serial_line: BoardLine = Line::new(pins.d10.into_output().downgrade());
    let latch_line: BoardLine = Line::new(pins.d11.into_output().downgrade());
    let clock_line: BoardLine = Line::new(pins.d12.into_output().downgrade());
    // /OE is active low: the logical high driven at construction enables the outputs
    let enable_line: BoardLine = Line::active_low(pins.d9.into_output().downgrade());

    let mut register = match ShiftRegister::builder()
        .serial(serial_line)
        .clock(clock_line)
        .latch(latch_line)
        .output_enable(enable_line)
        .bit_length(BIT_LENGTH)
        .build()
    {
        Ok(register) => register,
        Err(e) => {
            uwriteln!(&mut serial, "setup failed: {}\r", e).ok();
            panic!();
        }
    };

    let mut count: u8 = 0;
    loop {
        if register.shift_byte(count, true).is_err() {
            uwriteln!(&mut serial, "write failed at {}\r", count).ok();
        } else {
            uwriteln!(&mut serial, "pushed {}\r", count).ok();
        }
        count = count.wrapping_add(1);
        arduino_hal::delay_ms(1000);
    }
}
