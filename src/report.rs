// File: src/report.rs
use crate::core::types::Prediction;
use crate::error::IoLayerError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The two-line result text shown to the user and written by [`save_report`].
pub fn format_prediction(prediction: &Prediction) -> String {
    format!(
        "Predicted Personality: {}\nConfidence: {}%",
        prediction.label,
        prediction.confidence_display()
    )
}

/// Writes the report atomically: a temp file in the target directory is
/// persisted over `path`, so readers never see a half-written report.
pub fn save_report(prediction: &Prediction, path: &Path) -> Result<(), IoLayerError> {
    let io_err = |source| IoLayerError::Io { path: path.display().to_string(), source };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(io_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(format_prediction(prediction).as_bytes()).map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }
    temp_file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Prediction {
        Prediction { label: "Conscientiousness".into(), confidence: 41.666_666 }
    }

    #[test]
    fn formats_label_and_rounded_confidence() {
        assert_eq!(
            format_prediction(&sample()),
            "Predicted Personality: Conscientiousness\nConfidence: 41.67%"
        );
    }

    #[test]
    fn saves_into_missing_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("result.txt");

        save_report(&sample(), &path).unwrap();
        let other = Prediction { label: "Openness".into(), confidence: 80.0 };
        save_report(&other, &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Predicted Personality: Openness\nConfidence: 80.00%"
        );
    }
}
