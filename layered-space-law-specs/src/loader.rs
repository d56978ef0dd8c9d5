//! Fixture file loading.

use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};
use crate::fixture::LawFixture;

/// Parse fixture TOML. `origin` names the source in errors.
pub fn parse_fixture(source: &str, origin: &str) -> SpecResult<LawFixture> {
    toml::from_str(source).map_err(|e| SpecError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<LawFixture> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_fixture(&content, &path.display().to_string())
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by relative
/// path.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, LawFixture)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, LawFixture)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let read_error = |e: std::io::Error| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    };

    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_nested_fixtures_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        for name in ["b.toml", "a.toml", "nested/c.toml"] {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            writeln!(file, "title = \"{}\"", name).unwrap();
        }
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        let names: Vec<_> = fixtures.iter().map(|(n, _)| n.as_str()).collect();
        let expected = vec![
            "a.toml".to_string(),
            "b.toml".to_string(),
            Path::new("nested").join("c.toml").display().to_string(),
        ];
        assert_eq!(names, expected);
        assert_eq!(fixtures[0].1.title.as_deref(), Some("a.toml"));
    }

    #[test]
    fn missing_directory_is_empty() {
        let fixtures = load_all_fixtures(Path::new("no/such/dir")).unwrap();
        assert!(fixtures.is_empty());
    }

    #[test]
    fn unreadable_file_is_a_load_error() {
        let err = load_fixture(Path::new("no/such/fixture.toml")).unwrap_err();
        assert!(matches!(err, SpecError::Load { .. }));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = parse_fixture("documents = 3", "inline").unwrap_err();
        assert!(matches!(err, SpecError::Parse { ref path, .. } if path == "inline"));
    }
}
