//! The shift register protocol engine.
//!
//! Data is committed to the storage stage on the rising edge of the clock line
//! and copied to the outputs on the rising edge of the latch line. Every
//! operation leaves serial, clock and latch low when it returns.

use crate::error::{ConfigurationError, Error, LineRole};
use crate::line::OutputLine;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// A chain of one or more serial-in/parallel-out shift registers.
///
/// Datasheets: <https://www.ti.com/lit/ds/symlink/sn74hc595.pdf>,
/// <http://archive.fairchip.com/pdf/MACROBLOCK/MBI5168.pdf>
pub struct ShiftRegister<L> {
    serial: L,
    clock: L,
    latch: L,
    output_enable: Option<L>,
    bit_length: usize,
}

/// Collects the lines of a [`ShiftRegister`] before it is driven.
pub struct Builder<L> {
    serial: Option<L>,
    clock: Option<L>,
    latch: Option<L>,
    output_enable: Option<L>,
    bit_length: Option<usize>,
}

impl<L: OutputLine> Builder<L> {
    pub fn serial(mut self, line: L) -> Self {
        self.serial = Some(line);
        self
    }

    pub fn clock(mut self, line: L) -> Self {
        self.clock = Some(line);
        self
    }

    pub fn latch(mut self, line: L) -> Self {
        self.latch = Some(line);
        self
    }

    /// Leave unset when /OE is tied to ground.
    pub fn output_enable(mut self, line: L) -> Self {
        self.output_enable = Some(line);
        self
    }

    /// Total number of bits across all chained registers. Required; the
    /// chain length cannot be detected.
    pub fn bit_length(mut self, bit_length: usize) -> Self {
        self.bit_length = Some(bit_length);
        self
    }

    /// Validates the configuration, then drives serial, latch and clock low
    /// and output enable high.
    pub fn build(self) -> Result<ShiftRegister<L>, Error<L::Error>> {
        let serial = self
            .serial
            .ok_or(ConfigurationError::MissingLine(LineRole::Serial))?;
        let clock = self
            .clock
            .ok_or(ConfigurationError::MissingLine(LineRole::Clock))?;
        let latch = self
            .latch
            .ok_or(ConfigurationError::MissingLine(LineRole::Latch))?;
        let bit_length = match self.bit_length {
            None => return Err(ConfigurationError::MissingBitLength.into()),
            Some(0) => return Err(ConfigurationError::ZeroBitLength.into()),
            Some(n) => n,
        };

        let mut register = ShiftRegister {
            serial,
            clock,
            latch,
            output_enable: self.output_enable,
            bit_length,
        };
        register.reset_lines().map_err(Error::Line)?;
        Ok(register)
    }
}

impl<L: OutputLine> ShiftRegister<L> {
    pub fn builder() -> Builder<L> {
        Builder {
            serial: None,
            clock: None,
            latch: None,
            output_enable: None,
            bit_length: None,
        }
    }

    pub fn new(
        serial: L,
        clock: L,
        latch: L,
        output_enable: Option<L>,
        bit_length: usize,
    ) -> Result<Self, Error<L::Error>> {
        let builder = Self::builder()
            .serial(serial)
            .clock(clock)
            .latch(latch)
            .bit_length(bit_length);
        match output_enable {
            Some(line) => builder.output_enable(line).build(),
            None => builder.build(),
        }
    }

    fn reset_lines(&mut self) -> Result<(), L::Error> {
        self.serial.write(false)?;
        self.latch.write(false)?;
        self.clock.write(false)?;
        // outputs start out in the state enable_output(true) selects
        if let Some(oe) = self.output_enable.as_mut() {
            oe.write(true)?;
        }
        Ok(())
    }

    /// Bits across all chained registers.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    pub fn has_output_enable(&self) -> bool {
        self.output_enable.is_some()
    }

    /// Shifts one bit into the storage stage without latching.
    pub fn shift_bit(&mut self, value: bool) -> Result<(), L::Error> {
        self.serial.write(value)?;
        // rising edge commits the bit
        self.clock.write(true)?;
        self.serial.write(false)?;
        self.clock.write(false)
    }

    /// Shifts eight bits without latching.
    pub fn shift_out(&mut self, byte: u8, order: BitOrder) -> Result<(), L::Error> {
        for i in 0..8 {
            let bit = match order {
                BitOrder::MsbFirst => (0x80 >> i) & byte,
                BitOrder::LsbFirst => (1 << i) & byte,
            };
            self.shift_bit(bit != 0)?;
        }
        Ok(())
    }

    /// Shifts a byte most significant bit first and, if `latch` is set,
    /// makes it visible on the outputs.
    ///
    /// For chains longer than a byte, shift the most significant byte first
    /// and only latch after the last one.
    pub fn shift_byte(&mut self, value: u8, latch: bool) -> Result<(), L::Error> {
        self.shift_out(value, BitOrder::MsbFirst)?;
        if latch {
            self.latch()?;
        }
        Ok(())
    }

    /// Shifts a whole chain worth of bytes, most significant byte first, and
    /// latches once at the end.
    pub fn shift_bytes(&mut self, bytes: &[u8]) -> Result<(), L::Error> {
        for &byte in bytes {
            self.shift_byte(byte, false)?;
        }
        self.latch()
    }

    /// Shifts zeros through the whole chain, latching after every byte.
    ///
    /// Fails without touching any line if the chain is not a whole number of
    /// bytes.
    pub fn shift_clear(&mut self) -> Result<(), Error<L::Error>> {
        if self.bit_length % 8 != 0 {
            return Err(ConfigurationError::UnalignedBitLength {
                bit_length: self.bit_length,
            }
            .into());
        }

        for _ in 0..self.bit_length / 8 {
            self.shift_byte(0, true).map_err(Error::Line)?;
        }
        Ok(())
    }

    /// Copies the storage stage to the outputs.
    pub fn latch(&mut self) -> Result<(), L::Error> {
        self.latch.write(true)?;
        self.latch.write(false)
    }

    /// Writes `value` to the output enable line, or does nothing if there is
    /// none.
    ///
    /// The sense is the line's own. /OE is active low on the usual parts, so
    /// with a plain line `false` enables the outputs, and with an active low
    /// line `true` does.
    pub fn enable_output(&mut self, value: bool) -> Result<(), L::Error> {
        match self.output_enable.as_mut() {
            Some(oe) => oe.write(value),
            None => Ok(()),
        }
    }

    /// Gives back `(serial, clock, latch, output_enable)`.
    pub fn release(self) -> (L, L, L, Option<L>) {
        (self.serial, self.clock, self.latch, self.output_enable)
    }
}
