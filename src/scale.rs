//! Generation of equal-tempered scale tables.

use crate::pitch::{Pitch, Pitched};
use crate::ratio::Ratio;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::iter::FusedIterator;

/// A single step of an equal-tempered table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleEntry {
    pub step_index: u16,
    pub ratio_from_base: Ratio,
    pub pitch: Pitch,
}

impl ScaleEntry {
    /// Renders `self` as a table row using `precision` decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nscale::pitch::Pitch;
    /// # use nscale::ratio::Ratio;
    /// # use nscale::scale::ScaleEntry;
    /// let entry = ScaleEntry {
    ///     step_index: 7,
    ///     ratio_from_base: Ratio::from_float(1.5),
    ///     pitch: Pitch::from_hz(392.0),
    /// };
    ///
    /// assert_eq!(entry.row(false, 3).to_string(), "7:\t392.000 Hz");
    /// assert_eq!(entry.row(true, 3).to_string(), "7:\t1.500\t392.000 Hz");
    /// assert_eq!(entry.row(true, 6).to_string(), "7:\t1.500000\t392.000000 Hz");
    /// ```
    pub fn row(&self, show_interval: bool, precision: usize) -> Row<'_> {
        Row {
            entry: self,
            show_interval,
            precision,
        }
    }
}

/// Table row representation of a [`ScaleEntry`].
pub struct Row<'a> {
    entry: &'a ScaleEntry,
    show_interval: bool,
    precision: usize,
}

impl Display for Row<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:\t", self.entry.step_index)?;
        if self.show_interval {
            write!(
                f,
                "{:.precision$}\t",
                self.entry.ratio_from_base,
                precision = self.precision
            )?;
        }
        write!(f, "{:.precision$}", self.entry.pitch, precision = self.precision)
    }
}

/// Lazily generates the `num_steps + 1` entries of an equal division of the octave.
///
/// The final entry is located exactly one octave above the base pitch. The pitches are
/// accumulated by repeated multiplication with the step ratio.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use nscale::note::StartPitch;
/// # use nscale::scale::EqualSteps;
/// let steps = EqualSteps::new(1, StartPitch::Hz(100.0));
/// assert_eq!(steps.len(), 2);
///
/// let entries: Vec<_> = steps.collect();
/// assert_eq!(entries[0].step_index, 0);
/// assert_approx_eq!(entries[0].ratio_from_base.as_float(), 1.0);
/// assert_approx_eq!(entries[0].pitch.as_hz(), 100.0);
/// assert_eq!(entries[1].step_index, 1);
/// assert_approx_eq!(entries[1].ratio_from_base.as_float(), 2.0);
/// assert_approx_eq!(entries[1].pitch.as_hz(), 200.0);
/// ```
///
/// # Panics
///
/// Panics if `num_steps` is 0.
#[derive(Clone, Debug)]
pub struct EqualSteps {
    num_steps: u16,
    step_ratio: Ratio,
    next_index: Option<u16>,
    next_hz: f64,
}

impl EqualSteps {
    pub fn new(num_steps: u16, base: impl Pitched) -> Self {
        Self {
            num_steps,
            step_ratio: Ratio::octave().divided_into_equal_steps(num_steps),
            next_index: Some(0),
            next_hz: base.pitch().as_hz(),
        }
    }

    pub fn step_ratio(&self) -> Ratio {
        self.step_ratio
    }
}

impl Iterator for EqualSteps {
    type Item = ScaleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let step_index = self.next_index?;

        let entry = ScaleEntry {
            step_index,
            ratio_from_base: self.step_ratio.repeated(step_index),
            pitch: Pitch::from_hz(self.next_hz),
        };
        self.next_index = step_index
            .checked_add(1)
            .filter(|&index| index <= self.num_steps);
        self.next_hz *= self.step_ratio.as_float();

        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next_index {
            Some(index) => usize::from(self.num_steps - index) + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EqualSteps {}

impl FusedIterator for EqualSteps {}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use crate::note::StartPitch;

    use super::*;

    #[test]
    fn generate_num_steps_plus_one_entries() {
        for num_steps in 1..=24 {
            let entries: Vec<_> = EqualSteps::new(num_steps, Pitch::from_hz(261.0)).collect();

            assert_eq!(entries.len(), usize::from(num_steps) + 1);
            for (index, entry) in entries.iter().enumerate() {
                assert_eq!(usize::from(entry.step_index), index);
            }

            let first = entries.first().unwrap();
            let last = entries.last().unwrap();
            assert_approx_eq!(first.ratio_from_base.as_float(), 1.0);
            assert_approx_eq!(last.ratio_from_base.as_float(), 2.0);
            assert_approx_eq!(first.pitch.as_hz(), 261.0);
            assert_approx_eq!(last.pitch.as_hz(), 522.0, 1e-9);
        }
    }

    #[test]
    fn twelve_steps_from_440_hz() {
        let entries: Vec<_> = EqualSteps::new(12, StartPitch::Hz(440.0)).collect();

        assert_eq!(entries[0].row(false, 3).to_string(), "0:\t440.000 Hz");
        assert_eq!(entries[3].row(false, 3).to_string(), "3:\t523.251 Hz");
        assert_eq!(entries[7].row(true, 3).to_string(), "7:\t1.498\t659.255 Hz");
        assert_eq!(entries[12].row(false, 3).to_string(), "12:\t880.000 Hz");
    }

    #[test]
    fn midi_69_starts_at_440_hz() {
        let mut steps = EqualSteps::new(12, StartPitch::MidiNote(69.0));
        assert_approx_eq!(steps.next().unwrap().pitch.as_hz(), 440.0);
    }

    #[test]
    fn pitches_are_accumulated() {
        let steps = EqualSteps::new(7, Pitch::from_hz(100.0));
        let step_ratio = steps.step_ratio().as_float();

        let mut expected_hz = 100.0;
        for entry in steps {
            assert_eq!(entry.pitch.as_hz(), expected_hz);
            expected_hz *= step_ratio;
        }
    }

    #[test]
    fn exact_size() {
        let mut steps = EqualSteps::new(5, Pitch::from_hz(100.0));
        assert_eq!(steps.len(), 6);
        steps.next();
        steps.next();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps.by_ref().count(), 4);
        assert_eq!(steps.next(), None);
        assert_eq!(steps.len(), 0);
    }

    #[test]
    fn file_and_console_rows_agree() {
        for entry in EqualSteps::new(19, StartPitch::MidiNote(60.0)) {
            let console = entry.row(true, 3).to_string();
            let file = entry.row(true, 6).to_string();

            let console_fields: Vec<_> = console.split('\t').collect();
            let file_fields: Vec<_> = file.split('\t').collect();
            assert_eq!(console_fields[0], file_fields[0]);

            let parse = |field: &str| field.trim_end_matches(" Hz").parse::<f64>().unwrap();
            for (&console_field, &file_field) in console_fields[1..].iter().zip(&file_fields[1..]) {
                assert!((parse(console_field) - parse(file_field)).abs() <= 0.0005);
            }
        }
    }
}
