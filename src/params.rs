//! Validation of the raw user input describing an equal-tempered table.

use crate::note::StartPitch;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Supported number of equal divisions of the octave.
pub const NOTES_RANGE: RangeInclusive<u16> = 1..=24;

/// Highest accepted MIDI start value.
pub const MAX_MIDI_START_VALUE: f64 = 127.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleParameters {
    pub notes: u16,
    pub start_value: f64,
    pub is_midi: bool,
    pub show_interval: bool,
    pub output_path: Option<PathBuf>,
}

impl ScaleParameters {
    /// Parses and validates the textual `N` and `startVal` arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nscale::params::{ParameterError, ScaleParameters};
    /// let params = ScaleParameters::parse("12", "440", false, true, None).unwrap();
    /// assert_eq!(params.notes, 12);
    /// assert_eq!(params.start_value, 440.0);
    ///
    /// assert_eq!(
    ///     ScaleParameters::parse("25", "440", false, false, None),
    ///     Err(ParameterError::NotesOutOfRange { notes: 25 })
    /// );
    /// ```
    pub fn parse(
        notes: &str,
        start_value: &str,
        is_midi: bool,
        show_interval: bool,
        output_path: Option<PathBuf>,
    ) -> Result<Self, ParameterError> {
        let notes = parse_notes(notes)?;
        let start_value = parse_start_value(start_value)?;

        let params = Self {
            notes,
            start_value,
            is_midi,
            show_interval,
            output_path,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if !NOTES_RANGE.contains(&self.notes) {
            return Err(ParameterError::NotesOutOfRange {
                notes: i64::from(self.notes),
            });
        }
        if self.is_midi {
            if self.start_value > MAX_MIDI_START_VALUE {
                return Err(ParameterError::MidiOutOfRange {
                    start_value: self.start_value,
                });
            }
        } else if self.start_value <= 0.0 {
            return Err(ParameterError::NonPositiveFrequency {
                start_value: self.start_value,
            });
        }
        Ok(())
    }

    /// Reports suspicious but accepted input. Negative MIDI numbers are tolerated.
    ///
    /// ```
    /// # use nscale::params::{ParameterWarning, ScaleParameters};
    /// let params = ScaleParameters::parse("12", "-3", true, false, None).unwrap();
    /// assert_eq!(params.warnings(), [ParameterWarning::NegativeMidiNote { start_value: -3.0 }]);
    /// ```
    pub fn warnings(&self) -> Vec<ParameterWarning> {
        let mut warnings = Vec::new();
        if self.is_midi && self.start_value < 0.0 {
            warnings.push(ParameterWarning::NegativeMidiNote {
                start_value: self.start_value,
            });
        }
        warnings
    }

    pub fn start_pitch(&self) -> StartPitch {
        StartPitch::from_value(self.start_value, self.is_midi)
    }
}

fn parse_notes(notes: &str) -> Result<u16, ParameterError> {
    let parsed = notes
        .trim()
        .parse::<i64>()
        .map_err(|_| ParameterError::InvalidNumber {
            name: "N",
            value: notes.to_owned(),
        })?;
    u16::try_from(parsed)
        .ok()
        .filter(|notes| NOTES_RANGE.contains(notes))
        .ok_or(ParameterError::NotesOutOfRange { notes: parsed })
}

fn parse_start_value(start_value: &str) -> Result<f64, ParameterError> {
    start_value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParameterError::InvalidNumber {
            name: "startVal",
            value: start_value.to_owned(),
        })
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParameterError {
    InvalidNumber { name: &'static str, value: String },
    NotesOutOfRange { notes: i64 },
    MidiOutOfRange { start_value: f64 },
    NonPositiveFrequency { start_value: f64 },
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParameterError::InvalidNumber { name, value } => {
                write!(f, "error: {name} must be a number but was '{value}'.")
            }
            ParameterError::NotesOutOfRange { .. } => write!(
                f,
                "error: N out of range. Must be between {} and {}.",
                NOTES_RANGE.start(),
                NOTES_RANGE.end()
            ),
            ParameterError::MidiOutOfRange { .. } => {
                write!(f, "error: MIDI startVal must be <= {MAX_MIDI_START_VALUE}.")
            }
            ParameterError::NonPositiveFrequency { .. } => {
                write!(f, "error: frequency startVal must be positive.")
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParameterWarning {
    NegativeMidiNote { start_value: f64 },
}

impl Display for ParameterWarning {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParameterWarning::NegativeMidiNote { .. } => {
                write!(f, "warning: MIDI startVal should be >= 0.")
            }
        }
    }
}
