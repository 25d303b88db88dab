//! Tests for the builder build JSON directory fallback.

use rstest::rstest;

use super::helpers::{Fixture, Sections};
use crate::config::SettingLayer;

const BOTH_DIRS: Sections<'static> = &[
    ("default", &[("builder_build_json_dir", "builder")]),
    ("general", &[("build_json_dir", "general")]),
];

const GENERAL_ONLY: Sections<'static> = &[
    ("default", &[]),
    ("general", &[("build_json_dir", "general")]),
];

const NEITHER: Sections<'static> = &[("default", &[])];

#[rstest]
#[case::builder_dir_preferred(BOTH_DIRS, Some("builder"))]
#[case::general_fallback(GENERAL_ONLY, Some("general"))]
#[case::neither(NEITHER, None)]
fn builder_build_json_dir(#[case] sections: Sections<'_>, #[case] expected: Option<&str>) {
    let fixture = Fixture::new();
    let conf = fixture.configuration(sections);

    assert_eq!(conf.get_builder_build_json_store().as_deref(), expected);
}

#[rstest]
fn builder_build_json_dir_ignores_overrides() {
    let fixture = Fixture::new();
    let conf = fixture
        .configuration(&[("general", &[("build_json_dir", "general")])])
        .with_overrides(SettingLayer {
            build_json_dir: Some("kw".to_owned()),
            ..Default::default()
        });

    assert_eq!(
        conf.get_builder_build_json_store().as_deref(),
        Some("general"),
        "only the configuration file feeds the builder directory"
    );
    assert_eq!(
        conf.get_build_json_store().as_deref(),
        Some("kw"),
        "the general build directory honours overrides"
    );
}

#[rstest]
fn builder_build_json_dir_reads_instance_section() {
    let fixture = Fixture::new();
    let conf = fixture
        .configuration(&[
            ("default", &[("builder_build_json_dir", "default-builder")]),
            ("stage", &[("builder_build_json_dir", "stage-builder")]),
        ])
        .with_section("stage");

    assert_eq!(
        conf.get_builder_build_json_store().as_deref(),
        Some("stage-builder")
    );
}
