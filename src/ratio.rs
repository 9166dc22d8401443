//! Linear and logarithmic operations on frequency ratios.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Struct representing the relative distance between two pitches.
///
/// Mathematically, this distance can be interpreted as the factor between the two pitches in
/// linear frequency space or as the offset between them in logarithmic frequency space.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use nscale::ratio::Ratio;
/// assert_approx_eq!(Ratio::from_float(1.5).as_cents(), 701.955);
/// assert_approx_eq!(Ratio::from_float(1.25).as_semitones(), 3.863137);
/// assert_approx_eq!(Ratio::from_float(8.0).as_octaves(), 3.0);
/// ```
///
/// # Panics
///
/// Panics if the *linear* value is not a finite positive number.
///
/// ```should_panic
/// # use nscale::ratio::Ratio;
/// Ratio::from_float(0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio {
    float_value: f64,
}

impl Ratio {
    pub fn from_float(float_value: f64) -> Self {
        assert!(
            float_value.is_finite() && float_value > 0.0,
            "Ratio must be finite and positive but was {float_value}"
        );
        Self { float_value }
    }

    pub fn octave() -> Self {
        Self::from_float(2.0)
    }

    /// Creates a new [`Ratio`] instance by applying `self` `num_repetitions` times.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use nscale::ratio::Ratio;
    /// assert_approx_eq!(Ratio::from_float(1.5).repeated(2).as_float(), 2.25);
    /// assert_approx_eq!(Ratio::from_float(1.5).repeated(0).as_float(), 1.0);
    /// ```
    pub fn repeated(self, num_repetitions: impl Into<f64>) -> Ratio {
        Ratio::from_float(self.float_value.powf(num_repetitions.into()))
    }

    /// Returns the [`Ratio`] resulting from dividing `self` into `num_steps` equal steps.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use nscale::ratio::Ratio;
    /// assert_approx_eq!(Ratio::octave().divided_into_equal_steps(15).as_cents(), 80.0);
    /// assert_approx_eq!(Ratio::octave().divided_into_equal_steps(12).as_float(), 1.059463);
    /// ```
    pub fn divided_into_equal_steps(self, num_steps: impl Into<f64>) -> Ratio {
        Ratio::from_float(self.float_value.powf(num_steps.into().recip()))
    }

    pub fn as_float(self) -> f64 {
        self.float_value
    }

    pub fn as_cents(self) -> f64 {
        self.as_semitones() * 100.0
    }

    pub fn as_semitones(self) -> f64 {
        self.as_octaves() * 12.0
    }

    pub fn as_octaves(self) -> f64 {
        self.float_value.log2()
    }
}

/// [`Ratio`]s can be formatted as float or cents.
///
/// # Examples
///
/// ```
/// # use nscale::ratio::Ratio;
/// // As float
/// assert_eq!(format!("{}", Ratio::from_float(1.5)), "1.5000");
/// assert_eq!(format!("{:.3}", Ratio::octave().divided_into_equal_steps(12)), "1.059");
///
/// // As cents
/// assert_eq!(format!("{:#}", Ratio::from_float(1.5)), "+702.0c");
/// assert_eq!(format!("{:#.2}", Ratio::from_float(1.0 / 1.5)), "-701.96c");
/// ```
impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let formatted = if f.alternate() {
            format!(
                "{:+.precision$}c",
                self.as_cents(),
                precision = f.precision().unwrap_or(1)
            )
        } else {
            format!(
                "{:.precision$}",
                self.as_float(),
                precision = f.precision().unwrap_or(4)
            )
        };
        f.pad_integral(true, "", &formatted)
    }
}
