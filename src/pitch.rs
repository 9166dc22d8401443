use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Absolute frequency of a sound, measured in Hz.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Pitch {
    hz: f64,
}

impl Pitch {
    pub const fn from_hz(hz: f64) -> Pitch {
        Pitch { hz }
    }

    pub fn as_hz(self) -> f64 {
        self.hz
    }
}

/// Objects which have a [`Pitch`] assigned.
pub trait Pitched {
    /// Returns the [`Pitch`] of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use nscale::pitch::{Pitch, Pitched};
    /// let pitch = Pitch::from_hz(123.456);
    /// assert_approx_eq!(pitch.pitch().as_hz(), 123.456);
    /// ```
    fn pitch(&self) -> Pitch;
}

impl Pitched for Pitch {
    fn pitch(&self) -> Pitch {
        *self
    }
}

/// [`Pitch`]es are rendered in Hz using 3 decimals unless a precision is given.
///
/// # Examples
///
/// ```
/// # use nscale::pitch::Pitch;
/// assert_eq!(Pitch::from_hz(440.0).to_string(), "440.000 Hz");
/// assert_eq!(format!("{:.6}", Pitch::from_hz(261.6255653)), "261.625565 Hz");
/// ```
impl Display for Pitch {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{:.precision$} Hz",
            self.hz,
            precision = f.precision().unwrap_or(3)
        )
    }
}
