// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing_appender::rolling::RollingFileAppender;

/// Opens the log file behind [`WriterArg::File`], eg: `xy_calc --log-writer file
/// --log-file logs/xy_calc.txt`. The file is never rotated, and a missing parent folder
/// is created.
///
/// # Errors
///
/// Fails if `log_file_path` has no file name, or its folder can't be created.
///
/// [`WriterArg::File`]: crate::WriterArg::File
pub fn try_create(log_file_path: impl AsRef<Path>) -> miette::Result<RollingFileAppender> {
    let path = log_file_path.as_ref();

    let file_name = path
        .file_name()
        .ok_or_else(|| miette::miette!("Log file path {} has no file name", path.display()))?;

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(folder).into_diagnostic()?;

    Ok(tracing_appender::rolling::never(folder, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_rejects_missing_file_name() {
        assert!(try_create("/").is_err());
        assert!(try_create("logs/..").is_err());
    }

    #[test]
    fn test_try_create_makes_missing_folder() {
        let folder = std::env::temp_dir()
            .join(format!("r3bl_xy_appender_{}", std::process::id()))
            .join("nested");
        let file_path = folder.join("xy_calc.txt");
        let _ = std::fs::remove_dir_all(&folder);

        let appender = try_create(&file_path);
        assert!(appender.is_ok());
        assert!(file_path.exists());
    }
}
