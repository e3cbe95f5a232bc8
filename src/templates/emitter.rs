use super::notebook::{Notebook, NOTEBOOK_EXTENSION};
use super::script::{render_script, SCRIPT_EXTENSION};
use super::{Result, TemplateError};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFiles {
    pub script: PathBuf,
    pub notebook: PathBuf,
}

/// Writes the starter script and notebook for a base name into one directory.
pub struct TemplateEmitter {
    output_dir: PathBuf,
}

impl Default for TemplateEmitter {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TemplateEmitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn script_path(&self, base: &str) -> PathBuf {
        self.target(format!("{base}.{SCRIPT_EXTENSION}"))
    }

    pub fn notebook_path(&self, base: &str) -> PathBuf {
        self.target(format!("{base}.{NOTEBOOK_EXTENSION}"))
    }

    /// Files for the current directory are addressed by bare name.
    fn target(&self, file_name: String) -> PathBuf {
        if self.output_dir == Path::new(".") {
            PathBuf::from(file_name)
        } else {
            self.output_dir.join(file_name)
        }
    }

    pub fn emit_script(&self, base: &str, date: NaiveDate) -> Result<PathBuf> {
        let path = self.script_path(base);
        write_file(&path, render_script(base, date))?;
        info!("Created Python script: {}", path.display());
        Ok(path)
    }

    pub fn emit_notebook(&self, base: &str, date: NaiveDate) -> Result<PathBuf> {
        let path = self.notebook_path(base);
        let json = Notebook::analysis_template(base, date).to_json()?;
        write_file(&path, json)?;
        info!("Created Jupyter notebook: {}", path.display());
        Ok(path)
    }

    /// Writes the script, then the notebook. Existing files are overwritten.
    /// A failed notebook write leaves the script in place.
    pub fn emit(&self, base: &str, date: NaiveDate) -> Result<EmittedFiles> {
        let script = self.emit_script(base, date)?;
        let notebook = self.emit_notebook(base, date)?;
        Ok(EmittedFiles { script, notebook })
    }
}

fn write_file(path: &Path, contents: String) -> Result<()> {
    fs::write(path, contents).map_err(|source| TemplateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_paths_use_fixed_extensions() {
        let emitter = TemplateEmitter::new("out");
        assert_eq!(emitter.script_path("report"), Path::new("out/report.py"));
        assert_eq!(emitter.notebook_path("report"), Path::new("out/report.ipynb"));
    }

    #[test]
    fn test_current_dir_paths_are_bare_names() {
        let emitter = TemplateEmitter::default();
        assert_eq!(emitter.script_path("report").display().to_string(), "report.py");
        assert_eq!(emitter.notebook_path("report").display().to_string(), "report.ipynb");
    }

    #[test]
    fn test_emit_overwrites() {
        let dir = tempdir().unwrap();
        let emitter = TemplateEmitter::new(dir.path());
        fs::write(emitter.script_path("report"), "stale").unwrap();

        let files = emitter.emit("report", date()).unwrap();
        let script = fs::read_to_string(&files.script).unwrap();
        assert!(script.starts_with("#!/usr/bin/env python3"));

        let first = fs::read(&files.notebook).unwrap();
        emitter.emit("report", date()).unwrap();
        assert_eq!(fs::read(&files.notebook).unwrap(), first);
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let emitter = TemplateEmitter::new(dir.path().join("missing"));
        let err = emitter.emit("report", date()).unwrap_err();
        match err {
            TemplateError::Write { path, .. } => assert!(path.ends_with("report.py")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_script_survives_notebook_failure() {
        let dir = tempdir().unwrap();
        let emitter = TemplateEmitter::new(dir.path());
        fs::create_dir(emitter.notebook_path("report")).unwrap();

        let err = emitter.emit("report", date()).unwrap_err();
        assert!(matches!(err, TemplateError::Write { .. }));
        assert!(emitter.script_path("report").is_file());
    }
}
