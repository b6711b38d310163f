use newtype_manifest::{Error, NewtypeToml};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[output]
dir = "Generated"

[types.Pair]
kind = "struct"

[[types.Pair.members]]
kind = "operator"
symbol = "+"
parameters = [{ name = "a", type = "Pair" }, { name = "b", type = "Pair" }]
returns = "Pair"

[[aliases]]
name = "PairA"
underlying = "Pair"

[[aliases]]
name = "PairB"
underlying = "Pair"
carrier = "class"
"#;

#[test]
fn test_open_resolves_output_dir_next_to_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("newtype.toml");
    std::fs::write(&path, MANIFEST).unwrap();

    let file = NewtypeToml::open(&path).unwrap();
    assert_eq!(file.path(), path);
    assert_eq!(file.output_dir(), temp.path().join("Generated"));

    let manifest = file.manifest();
    assert_eq!(manifest.aliases.len(), 2);
    let pair = manifest.underlying(&manifest.aliases[0]).unwrap();
    assert_eq!(pair.underlying_type().full_name, "global::Pair");
    assert_eq!(pair.surface.members.len(), 1);
}

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = NewtypeToml::open(temp.path().join("missing.toml"));
    assert!(matches!(result.map(|_| ()).unwrap_err().as_ref(), Error::Io { .. }));
}

#[test]
fn test_parse_error_carries_filename() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[[aliases]\nname = ").unwrap();

    let err = NewtypeToml::open(&path).map(|_| ()).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}
