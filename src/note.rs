//! Resolve the starting point of a scale into an absolute [`Pitch`].

use crate::pitch::{Pitch, Pitched};
use crate::ratio::Ratio;

/// MIDI number of A3 which is the anchor of the MIDI-to-frequency mapping.
pub const A3_MIDI_NUMBER: f64 = 57.0;

/// Pitch of A3 in standard 440&nbsp;Hz tuning.
pub const A3_PITCH: Pitch = Pitch::from_hz(220.0);

/// MIDI number of middle C, five octaves above MIDI note 0.
pub const C4_MIDI_NUMBER: f64 = 60.0;

/// The pitch a scale starts from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartPitch {
    /// An absolute frequency in Hz.
    Hz(f64),
    /// A (possibly fractional) MIDI note number in 12-EDO at standard 440&nbsp;Hz tuning.
    MidiNote(f64),
}

impl StartPitch {
    pub fn from_value(start_value: f64, is_midi: bool) -> Self {
        if is_midi {
            StartPitch::MidiNote(start_value)
        } else {
            StartPitch::Hz(start_value)
        }
    }
}

/// The resolved base frequency.
///
/// MIDI note numbers are resolved by going up three semitones from A3 to C4, down five octaves
/// to MIDI note 0 and up again by the given number of semitones.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use nscale::note::StartPitch;
/// # use nscale::pitch::Pitched;
/// assert_approx_eq!(StartPitch::MidiNote(69.0).pitch().as_hz(), 440.0);
/// assert_approx_eq!(StartPitch::MidiNote(60.0).pitch().as_hz(), 261.625565);
/// assert_approx_eq!(StartPitch::MidiNote(0.0).pitch().as_hz(), 8.175799);
/// assert_approx_eq!(StartPitch::Hz(123.4).pitch().as_hz(), 123.4);
/// ```
impl Pitched for StartPitch {
    fn pitch(&self) -> Pitch {
        match *self {
            StartPitch::Hz(hz) => Pitch::from_hz(hz),
            StartPitch::MidiNote(midi_number) => {
                let semitone = Ratio::octave().divided_into_equal_steps(12);
                let c4 = A3_PITCH.as_hz()
                    * semitone
                        .as_float()
                        .powf(C4_MIDI_NUMBER - A3_MIDI_NUMBER);
                let c_minus_1 = c4 * 0.5f64.powf(C4_MIDI_NUMBER / 12.0);
                // Not routed through `Ratio` since very low MIDI numbers underflow to 0 Hz
                Pitch::from_hz(c_minus_1 * semitone.as_float().powf(midi_number))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn anchors_are_a3_and_c4() {
        assert_approx_eq!(StartPitch::MidiNote(A3_MIDI_NUMBER).pitch().as_hz(), 220.0);
        assert_approx_eq!(StartPitch::MidiNote(C4_MIDI_NUMBER).pitch().as_hz(), 261.625565);
    }

    #[test]
    fn midi_notes_follow_standard_tuning() {
        for midi_number in 0..=127 {
            let expected = 440.0 * 2f64.powf((f64::from(midi_number) - 69.0) / 12.0);
            let actual = StartPitch::MidiNote(f64::from(midi_number)).pitch().as_hz();
            assert!(
                (actual - expected).abs() < expected * 1e-12,
                "MIDI {midi_number} should be {expected} Hz but was {actual} Hz"
            );
        }
    }

    #[test]
    fn fractional_and_negative_midi_notes() {
        assert_approx_eq!(StartPitch::MidiNote(69.5).pitch().as_hz(), 452.892984);
        assert_approx_eq!(StartPitch::MidiNote(-12.0).pitch().as_hz(), 4.087899);
    }

    #[test]
    fn select_variant_from_flag() {
        assert_eq!(StartPitch::from_value(60.0, true), StartPitch::MidiNote(60.0));
        assert_eq!(StartPitch::from_value(60.0, false), StartPitch::Hz(60.0));
    }
}
