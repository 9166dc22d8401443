//! Compute equal-tempered frequency tables for `N` notes to the octave.
//!
//! # Examples
//!
//! ```
//! # use assert_approx_eq::assert_approx_eq;
//! # use nscale::note::StartPitch;
//! # use nscale::scale::EqualSteps;
//! let entries: Vec<_> = EqualSteps::new(12, StartPitch::MidiNote(69.0)).collect();
//!
//! assert_eq!(entries.len(), 13);
//! assert_approx_eq!(entries[0].pitch.as_hz(), 440.0);
//! assert_approx_eq!(entries[12].pitch.as_hz(), 880.0);
//! ```

pub mod note;
pub mod params;
pub mod pitch;
pub mod ratio;
pub mod scale;
