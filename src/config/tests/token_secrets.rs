//! Tests for `token_secrets` resolution through the configuration file.

use rstest::rstest;

use super::helpers::Fixture;
use crate::config::{ConfigError, SettingLayer, TokenSecrets};

fn secrets(entries: &[(&str, Option<&str>)]) -> TokenSecrets {
    entries
        .iter()
        .map(|(name, path)| ((*name).to_owned(), path.map(ToOwned::to_owned)))
        .collect()
}

#[rstest]
#[case::bare_name("secret", &[("secret", None)])]
#[case::name_and_path("secret:path", &[("secret", Some("path"))])]
#[case::path_with_colons("secret:path:with:colons", &[("secret", Some("path:with:colons"))])]
#[case::two_entries(
    "secret:path secret2:path2",
    &[("secret", Some("path")), ("secret2", Some("path2"))]
)]
#[case::mixed(
    "secret:path secret2 secret3:path3",
    &[("secret", Some("path")), ("secret2", None), ("secret3", Some("path3"))]
)]
#[case::padded(
    "  secret:path   \t  secret2 \t secret3:path3  ",
    &[("secret", Some("path")), ("secret2", None), ("secret3", Some("path3"))]
)]
#[case::continuation_lines(
    "\n   secret:path     secret2\n\n secret3:path3",
    &[("secret", Some("path")), ("secret2", None), ("secret3", Some("path3"))]
)]
#[case::continuation_lines_with_tabs(
    "\t\n   secret:path   \t\t  secret2\n\n \tsecret3:path3 \n\t\n",
    &[("secret", Some("path")), ("secret2", None), ("secret3", Some("path3"))]
)]
fn token_secrets_from_config_file(
    #[case] value: &str,
    #[case] expected: &[(&str, Option<&str>)],
) {
    let fixture = Fixture::new();
    let conf = fixture.configuration(&[("default", &[("token_secrets", value)])]);

    let parsed = conf
        .get_token_secrets()
        .expect("token secrets should parse");
    assert_eq!(parsed, Some(secrets(expected)));
}

#[rstest]
#[case::empty_path("secret:")]
#[case::root_path("secret:/")]
fn token_secrets_with_empty_path_fail_validation(#[case] value: &str) {
    let fixture = Fixture::new();
    let conf = fixture.configuration(&[("default", &[("token_secrets", value)])]);

    let result = conf.get_token_secrets();
    assert!(
        matches!(result, Err(ConfigError::Validation { .. })),
        "expected validation error for {value:?}, got {result:?}"
    );
}

#[rstest]
fn token_secrets_absent_when_unset() {
    let fixture = Fixture::new();
    let conf = fixture.configuration(&[("default", &[])]);

    let parsed = conf
        .get_token_secrets()
        .expect("missing token secrets are not an error");
    assert_eq!(parsed, None);
}

#[rstest]
fn token_secrets_keyword_override_replaces_file_value() {
    let fixture = Fixture::new();
    let conf = fixture
        .configuration(&[("default", &[("token_secrets", "secret:")])])
        .with_overrides(SettingLayer {
            token_secrets: Some("registry:/var/run/registry".to_owned()),
            ..Default::default()
        });

    let parsed = conf
        .get_token_secrets()
        .expect("override should bypass the malformed file value");
    assert_eq!(
        parsed,
        Some(secrets(&[("registry", Some("/var/run/registry"))]))
    );
}
