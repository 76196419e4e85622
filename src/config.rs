//! Run configuration: positional file paths and the percentile parameter

use std::fs;
use std::path::{Path, PathBuf};

/// File paths for one pipeline run.
pub struct Config {
    pub input_path: PathBuf,
    pub percentile_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    /// Build a config from the three positional arguments: transaction
    /// input, percentile source, output destination.
    ///
    /// Missing arguments are non-fatal: a usage message is printed and
    /// the conventional default paths are used instead, so the run still
    /// produces a (possibly empty) output file.
    pub fn from_args(args: &[String]) -> Self {
        if args.len() >= 3 {
            return Self {
                input_path: PathBuf::from(&args[0]),
                percentile_path: PathBuf::from(&args[1]),
                output_path: PathBuf::from(&args[2]),
            };
        }

        println!("Paths to three files must be included with the execution.");
        println!("Example:");
        println!("  donorflow input/itcont.txt input/percentile.txt output/repeat_donors.txt");
        Self {
            input_path: PathBuf::from("input/itcont.txt"),
            percentile_path: PathBuf::from("input/percentile.txt"),
            output_path: PathBuf::from("output/repeat_donors.txt"),
        }
    }
}

/// Read the process-wide percentile parameter from `path`, once, before
/// processing begins.
///
/// The first line is parsed as a decimal in [0, 100]; a missing,
/// unparseable, or out-of-range value falls back to 100.
pub fn load_percentile(path: &Path) -> f64 {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!(
                "⚠️ percentile file not found: {} ({}), defaulting to 100",
                path.display(),
                err
            );
            return 100.0;
        }
    };

    let first_line = contents.lines().next().unwrap_or("").trim();
    match first_line.parse::<f64>() {
        Ok(percentile) if (0.0..=100.0).contains(&percentile) => percentile,
        _ => {
            log::warn!(
                "⚠️ invalid percentile value '{}', defaulting to 100",
                first_line
            );
            100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_args_with_three_paths() {
        let args = vec![
            "in.txt".to_string(),
            "pct.txt".to_string(),
            "out.txt".to_string(),
        ];
        let config = Config::from_args(&args);
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.percentile_path, PathBuf::from("pct.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_from_args_defaults_when_missing() {
        let config = Config::from_args(&[]);
        assert_eq!(config.input_path, PathBuf::from("input/itcont.txt"));
        assert_eq!(config.output_path, PathBuf::from("output/repeat_donors.txt"));
    }

    #[test]
    fn test_load_percentile_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("percentile.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "30").unwrap();
        writeln!(file, "99").unwrap();
        assert_eq!(load_percentile(&path), 30.0);
    }

    #[test]
    fn test_load_percentile_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_percentile(&dir.path().join("absent.txt")), 100.0);
    }

    #[test]
    fn test_load_percentile_rejects_garbage_and_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        for contents in ["abc", "150", "-3"] {
            let path = dir.path().join("percentile.txt");
            std::fs::write(&path, contents).unwrap();
            assert_eq!(load_percentile(&path), 100.0, "contents {:?}", contents);
        }
    }
}
