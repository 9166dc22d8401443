use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use nscale::{params::ScaleParameters, pitch::Pitched, scale::EqualSteps};

use crate::{App, CliResult};

const CONSOLE_PRECISION: usize = 3;
const FILE_PRECISION: usize = 6;

/// Prints the table to the console and, if requested, to the output file.
///
/// Failing to create or write the output file is reported but does not abort the console output.
pub(crate) fn print_table(app: &mut App, params: &ScaleParameters) -> CliResult<()> {
    let mut file_output = match &params.output_path {
        Some(path) => create_output_file(app, path)?,
        None => None,
    };

    let start_pitch = params.start_pitch();
    let steps = EqualSteps::new(params.notes, start_pitch);
    log::debug!(
        "Base frequency: {:.6}, step ratio: {:.6} ({:#.3})",
        start_pitch.pitch(),
        steps.step_ratio(),
        steps.step_ratio()
    );

    let mut write_error = None;
    for entry in steps {
        app.writeln(entry.row(params.show_interval, CONSOLE_PRECISION))?;

        if let Some(file) = &mut file_output {
            let row = entry.row(params.show_interval, FILE_PRECISION);
            if let Err(err) = writeln!(file, "{row}") {
                write_error = Some(err);
                file_output = None;
            }
        }
    }

    if let Some(mut file) = file_output {
        if let Err(err) = file.flush() {
            write_error = Some(err);
        }
    }

    if let (Some(err), Some(path)) = (write_error, &params.output_path) {
        log::warn!("Could not write `{}`: {err}", path.display());
        app.errln(format_args!(
            "There was an error writing the file {} ({err})",
            path.display()
        ))?;
    }

    Ok(())
}

fn create_output_file(app: &mut App, path: &Path) -> io::Result<Option<BufWriter<File>>> {
    match File::create(path) {
        Ok(file) => {
            log::info!("Writing table to `{}`", path.display());
            Ok(Some(BufWriter::new(file)))
        }
        Err(err) => {
            log::warn!("Could not create `{}`: {err}", path.display());
            app.errln(format_args!(
                "WARNING: unable to create file {} ({err})",
                path.display()
            ))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use pretty_assertions::assert_eq;

    use crate::run_with_io;

    fn run(args: &[&str]) -> (String, String) {
        let mut output = Vec::new();
        let mut error = Vec::new();
        run_with_io(
            ["nscale"].iter().chain(args).map(|&arg| arg.to_owned()),
            &mut output,
            &mut error,
        )
        .unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(error).unwrap(),
        )
    }

    #[test]
    fn write_table_with_six_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");

        let (output, error) = run(&["-i", "2", "100", path.to_str().unwrap()]);

        assert_eq!(error, "");
        assert_eq!(
            output,
            "0:\t1.000\t100.000 Hz\n\
             1:\t1.414\t141.421 Hz\n\
             2:\t2.000\t200.000 Hz\n"
        );
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "0:\t1.000000\t100.000000 Hz\n\
             1:\t1.414214\t141.421356 Hz\n\
             2:\t2.000000\t200.000000 Hz\n"
        );
    }

    #[test]
    fn file_and_console_show_the_same_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");

        let (output, _) = run(&["-m", "17", "60.5", path.to_str().unwrap()]);
        let file_content = fs::read_to_string(path).unwrap();

        let parse_hz = |line: &str| -> f64 {
            let (_, freq) = line.split_once('\t').unwrap();
            freq.trim_end_matches(" Hz").parse().unwrap()
        };

        assert_eq!(output.lines().count(), 18);
        assert_eq!(file_content.lines().count(), 18);
        for (console_line, file_line) in output.lines().zip(file_content.lines()) {
            assert!((parse_hz(console_line) - parse_hz(file_line)).abs() <= 0.0005);
        }
    }

    #[test]
    fn unwritable_path_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("table.txt");

        let (output, error) = run(&["12", "440", path.to_str().unwrap()]);

        assert_eq!(output.lines().count(), 13);
        assert!(error.starts_with(&format!(
            "WARNING: unable to create file {} (",
            path.display()
        )));
        assert!(!path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn report_write_failure_after_table() {
        if !std::path::Path::new("/dev/full").exists() {
            return;
        }

        let (output, error) = run(&["24", "440", "/dev/full"]);

        assert_eq!(output.lines().count(), 25);
        assert!(error.starts_with("There was an error writing the file /dev/full ("));
    }
}
