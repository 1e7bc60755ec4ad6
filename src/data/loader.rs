use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use super::model::RawLaureate;
use crate::config::LoaderConfig;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Make sure the dataset is cached locally, then parse it.
pub fn load(config: &LoaderConfig) -> Result<Vec<RawLaureate>> {
    let path = ensure_cached(config)?;
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records = parse_records(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!("Loaded {} laureate records", records.len());
    Ok(records)
}

/// Create the cache directory and download the dataset if the cache file is
/// absent. Presence alone counts as fresh.
pub fn ensure_cached(config: &LoaderConfig) -> Result<PathBuf> {
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating {}", config.data_dir.display()))?;

    let path = config.cache_path();
    if path.exists() {
        log::debug!("Using cached dataset at {}", path.display());
        return Ok(path);
    }

    log::info!("Downloading {} from {}", config.file_name, config.url);
    let body = reqwest::blocking::get(&config.url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .with_context(|| format!("downloading {}", config.url))?;
    fs::write(&path, &body).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved {} bytes to {}", body.len(), path.display());

    Ok(path)
}

// ---------------------------------------------------------------------------
// JSON parsing
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "born_in": "USA",
///     "place_of_birth": "Springfield, Illinois, USA",
///     "gender": "male",
///     "date_of_birth": "May 3, 1950",
///     "year": 1990,
///     "category": "physics",
///     "name": "..."
///   },
///   ...
/// ]
/// ```
///
/// Fields are addressed by name; extra fields are ignored.
pub fn parse_records(text: &str) -> Result<Vec<RawLaureate>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().context("Expected top-level JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            parse_record(obj, i)
        })
        .collect()
}

fn parse_record(obj: &Map<String, JsonValue>, row: usize) -> Result<RawLaureate> {
    let award_year = obj
        .get("year")
        .and_then(json_to_year)
        .with_context(|| format!("Row {row}: missing or invalid 'year'"))?;

    Ok(RawLaureate {
        country_born: string_field(obj, "born_in"),
        affiliation: string_field(obj, "place_of_birth"),
        gender: string_field(obj, "gender"),
        date_of_birth: string_field(obj, "date_of_birth"),
        award_year,
        category: string_field(obj, "category").unwrap_or_default(),
    })
}

/// Strings pass through; `null`, missing and non-string values are `None`.
fn string_field(obj: &Map<String, JsonValue>, key: &str) -> Option<String> {
    obj.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn json_to_year(val: &JsonValue) -> Option<i64> {
    match val {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;

    const SAMPLE: &str = r#"[
        {"born_in": "USA", "place_of_birth": "Chicago, Illinois, USA",
         "gender": "male", "date_of_birth": "May 3, 1950", "year": 1990,
         "category": "physics", "name": "A"},
        {"born_in": "", "place_of_birth": null, "gender": null,
         "date_of_birth": "1920-01-01", "year": "1970", "category": null}
    ]"#;

    fn config_in(dir: &tempfile::TempDir) -> LoaderConfig {
        LoaderConfig {
            data_dir: dir.path().join("Data"),
            file_name: "Nobel_laureates.json".to_string(),
            // Nothing listens on the discard port.
            url: "http://127.0.0.1:9/unreachable".to_string(),
        }
    }

    /// Answer exactly one HTTP request with `status` and `body`, returning the
    /// URL to fetch.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (format!("http://{addr}/nobel_laureates.json"), handle)
    }

    #[test]
    fn test_parse_records_by_field_name() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].country_born.as_deref(), Some("USA"));
        assert_eq!(records[0].affiliation.as_deref(), Some("Chicago, Illinois, USA"));
        assert_eq!(records[0].gender.as_deref(), Some("male"));
        assert_eq!(records[0].award_year, 1990);
        assert_eq!(records[0].category, "physics");

        assert_eq!(records[1].country_born.as_deref(), Some(""));
        assert_eq!(records[1].affiliation, None);
        assert_eq!(records[1].gender, None);
        assert_eq!(records[1].award_year, 1970);
        assert_eq!(records[1].category, "");
    }

    #[test]
    fn test_non_string_affiliation_is_missing() {
        let records =
            parse_records(r#"[{"born_in": "", "place_of_birth": 42, "year": 1901}]"#).unwrap();
        assert_eq!(records[0].affiliation, None);
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(parse_records("").is_err());
        assert!(parse_records("{\"born_in\": \"USA\"}").is_err());
        assert!(parse_records("[1, 2]").is_err());
        assert!(parse_records(r#"[{"born_in": "USA"}]"#).is_err());
    }

    #[test]
    fn test_load_uses_existing_cache() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        fs::create_dir_all(&config.data_dir).unwrap();
        fs::write(config.cache_path(), SAMPLE).unwrap();

        let records = load(&config).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_reports_malformed_cache() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        fs::create_dir_all(&config.data_dir).unwrap();
        fs::write(config.cache_path(), "not json").unwrap();

        assert!(load(&config).is_err());
    }

    #[test]
    fn test_year_as_float_must_be_integral_and_in_range() {
        let records = parse_records(r#"[{"year": 1901.0}]"#).unwrap();
        assert_eq!(records[0].award_year, 1901);

        assert!(parse_records(r#"[{"year": 1901.5}]"#).is_err());
        assert!(parse_records(r#"[{"year": 1e300}]"#).is_err());
        assert!(parse_records(r#"[{"year": -1e300}]"#).is_err());
    }

    #[test]
    fn test_download_is_cached_verbatim_and_reused() {
        const BODY: &str = r#"[ {"born_in": "USA", "gender": "male", "year": 1990} ]"#;
        let dir = tempfile::tempdir().unwrap();
        let (url, server) = serve_once("200 OK", BODY);
        let config = LoaderConfig {
            url,
            ..config_in(&dir)
        };

        let first = load(&config).unwrap();
        server.join().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(fs::read(config.cache_path()).unwrap(), BODY.as_bytes());

        // The server is gone; a second load must come from the cache.
        let second = load(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_status_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let (url, server) = serve_once("404 Not Found", "not found");
        let config = LoaderConfig {
            url,
            ..config_in(&dir)
        };

        assert!(ensure_cached(&config).is_err());
        server.join().unwrap();
        assert!(!config.cache_path().exists());
    }

    #[test]
    fn test_download_failure_propagates_and_leaves_no_cache() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        assert!(ensure_cached(&config).is_err());
        assert!(config.data_dir.is_dir());
        assert!(!config.cache_path().exists());
    }
}
