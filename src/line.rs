//! Polarity-aware boolean output lines.

use embedded_hal::digital::v2::OutputPin;

/// A boolean output that can be written synchronously.
///
/// Implementations translate the logical value to a physical level themselves;
/// the shift register only ever talks in logical values.
pub trait OutputLine {
    type Error;

    fn write(&mut self, value: bool) -> Result<(), Self::Error>;
}

impl<L: OutputLine + ?Sized> OutputLine for &mut L {
    type Error = L::Error;

    fn write(&mut self, value: bool) -> Result<(), Self::Error> {
        (**self).write(value)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Physical level for a logical value.
    pub fn level(self, value: bool) -> bool {
        match self {
            Polarity::ActiveHigh => value,
            Polarity::ActiveLow => !value,
        }
    }
}

/// An [`OutputLine`] backed by a hardware pin.
pub struct Line<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> Line<P> {
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveHigh)
    }

    pub fn active_low(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveLow)
    }

    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Gives the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputLine for Line<P> {
    type Error = P::Error;

    fn write(&mut self, value: bool) -> Result<(), Self::Error> {
        match self.polarity.level(value) {
            true => self.pin.set_high(),
            false => self.pin.set_low(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Levels(Vec<bool>);

    impl OutputPin for Levels {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.push(true);
            Ok(())
        }
    }

    #[test]
    fn active_high_passes_value_through() {
        let mut line = Line::new(Levels::default());
        line.write(true).unwrap();
        line.write(false).unwrap();
        assert_eq!(line.release().0, vec![true, false]);
    }

    #[test]
    fn active_low_inverts() {
        let mut line = Line::active_low(Levels::default());
        assert_eq!(line.polarity(), Polarity::ActiveLow);
        line.write(true).unwrap();
        line.write(false).unwrap();
        assert_eq!(line.release().0, vec![false, true]);
    }

    #[test]
    fn borrowed_line_writes_through() {
        fn pulse<L: OutputLine>(mut line: L) -> Result<(), L::Error> {
            line.write(true)?;
            line.write(false)
        }

        let mut line = Line::new(Levels::default());
        pulse(&mut line).unwrap();
        assert_eq!(line.release().0, vec![true, false]);
    }

    #[test]
    fn polarity_levels() {
        assert!(Polarity::ActiveHigh.level(true));
        assert!(!Polarity::ActiveHigh.level(false));
        assert!(!Polarity::ActiveLow.level(true));
        assert!(Polarity::ActiveLow.level(false));
        assert_eq!(Polarity::default(), Polarity::ActiveHigh);
    }
}
