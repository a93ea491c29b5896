use std::{fs::read_to_string, path::Path, time::Duration};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::ConfigLoadError;

/// Read an environment variable, treating blank values as unset.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse a human readable duration such as `5s`, `1500ms` or `1m 30s`.
pub fn parse_duration(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            key,
            value: raw.to_string(),
            source,
        }
    })
}

/// Parse the launch instant.
///
/// RFC 3339 values carry their own offset. A bare `YYYY-MM-DDTHH:MM:SS` is
/// read as local wall-clock time; a local time that does not exist (DST gap)
/// is rejected.
pub fn parse_launch_instant(
    raw: &str,
) -> Result<DateTime<Utc>, ConfigLoadError> {
    let trimmed = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .map_err(|source| ConfigLoadError::InvalidLaunchInstant {
            value: raw.to_string(),
            source: Some(source),
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ConfigLoadError::InvalidLaunchInstant {
            value: raw.to_string(),
            source: None,
        })
}

/// Read a secret from disk, trimming surrounding whitespace.
///
/// Returns `Ok(None)` for an empty file.
pub fn read_secret_file(
    path: &Path,
) -> Result<Option<String>, ConfigLoadError> {
    let contents = read_to_string(path).map_err(|source| {
        ConfigLoadError::SecretFileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_use_humantime_syntax() {
        assert_eq!(
            parse_duration("tick", "1500ms").unwrap(),
            Duration::from_millis(1500)
        );
        assert_eq!(
            parse_duration("tick", "1m 30s").unwrap(),
            Duration::from_secs(90)
        );
        assert!(matches!(
            parse_duration("tick", "soon"),
            Err(ConfigLoadError::InvalidDuration { key: "tick", .. })
        ));
    }

    #[test]
    fn rfc3339_launch_keeps_offset() {
        let instant = parse_launch_instant("2025-09-18T02:00:00+02:00").unwrap();
        assert_eq!(instant.to_rfc3339(), "2025-09-18T00:00:00+00:00");
    }

    #[test]
    fn naive_launch_is_local_time() {
        let instant = parse_launch_instant("2025-09-18T00:00:00").unwrap();
        let expected = Local
            .with_ymd_and_hms(2025, 9, 18, 0, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(instant, expected);
    }

    #[test]
    fn garbage_launch_is_rejected() {
        assert!(matches!(
            parse_launch_instant("next tuesday"),
            Err(ConfigLoadError::InvalidLaunchInstant { .. })
        ));
    }

    #[test]
    fn empty_secret_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(read_secret_file(&path).unwrap(), None);

        std::fs::write(&path, "s3cret\n").unwrap();
        assert_eq!(read_secret_file(&path).unwrap().as_deref(), Some("s3cret"));
    }
}
