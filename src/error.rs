use core::fmt;

use ufmt::derive::uDebug;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

/// The job a line does for the shift register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, uDebug)]
pub enum LineRole {
    Serial,
    Clock,
    Latch,
    OutputEnable,
}

impl LineRole {
    pub fn name(self) -> &'static str {
        match self {
            LineRole::Serial => "serial",
            LineRole::Clock => "clock",
            LineRole::Latch => "latch",
            LineRole::OutputEnable => "output enable",
        }
    }
}

/// The shift register was set up, or asked to do something, its chain
/// cannot support.
#[derive(Copy, Clone, Debug, PartialEq, Eq, uDebug)]
pub enum ConfigurationError {
    /// One of the serial, clock or latch lines was not supplied. Never
    /// carries [`LineRole::OutputEnable`], which is optional.
    MissingLine(LineRole),
    /// The chain length was never declared.
    MissingBitLength,
    ZeroBitLength,
    /// Byte-wise operation on a chain that is not a whole number of bytes.
    UnalignedBitLength { bit_length: usize },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingLine(role) => write!(f, "{} line is required", role.name()),
            ConfigurationError::MissingBitLength => f.write_str("bit length must be declared"),
            ConfigurationError::ZeroBitLength => f.write_str("bit length must be non-zero"),
            ConfigurationError::UnalignedBitLength { bit_length } => write!(
                f,
                "bit length {} is not a multiple of 8",
                bit_length
            ),
        }
    }
}

impl uDisplay for ConfigurationError {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            ConfigurationError::MissingLine(role) => {
                uwrite!(f, "{} line is required", role.name())
            }
            ConfigurationError::MissingBitLength => f.write_str("bit length must be declared"),
            ConfigurationError::ZeroBitLength => f.write_str("bit length must be non-zero"),
            ConfigurationError::UnalignedBitLength { bit_length } => {
                uwrite!(f, "bit length {} is not a multiple of 8", *bit_length)
            }
        }
    }
}

/// Errors from shift register operations, generic over the line error.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    Configuration(ConfigurationError),
    /// A line write failed. The chain may hold a partially shifted value.
    Line(E),
}

impl<E> From<ConfigurationError> for Error<E> {
    fn from(e: ConfigurationError) -> Self {
        Error::Configuration(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(e) => write!(f, "configuration error: {}", e),
            Error::Line(e) => write!(f, "line write failed: {:?}", e),
        }
    }
}

impl<E> uDisplay for Error<E> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Error::Configuration(e) => uwrite!(f, "configuration error: {}", *e),
            Error::Line(_) => f.write_str("line write failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Buf(String);

    impl uWrite for Buf {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn display_names_missing_line() {
        let e = ConfigurationError::MissingLine(LineRole::Clock);
        assert_eq!(e.to_string(), "clock line is required");
    }

    #[test]
    fn udisplay_matches_display() {
        for e in [
            ConfigurationError::MissingLine(LineRole::Latch),
            ConfigurationError::MissingBitLength,
            ConfigurationError::ZeroBitLength,
            ConfigurationError::UnalignedBitLength { bit_length: 20 },
        ] {
            let mut buf = Buf(String::new());
            uwrite!(buf, "{}", e).unwrap();
            assert_eq!(buf.0, e.to_string());
        }
    }

    #[test]
    fn line_error_display() {
        let e: Error<u8> = Error::Line(3);
        assert_eq!(e.to_string(), "line write failed: 3");

        let e: Error<u8> = ConfigurationError::ZeroBitLength.into();
        assert_eq!(
            e.to_string(),
            "configuration error: bit length must be non-zero"
        );
    }
}
