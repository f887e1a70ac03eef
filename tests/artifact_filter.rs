// Behavioural checks for the artifact filter through the public API

use relx::artifacts::{ArtifactFilter, filter_artifacts};
use relx::providers::ExclusionRules;

fn rules() -> ExclusionRules {
    ExclusionRules::new(["_", "badinfo"], [".src.rpm", ".log"])
}

const LISTING: &[&str] = &[
    "_buildenv",
    "_statistics",
    "standard/",
    "badinfo.txt",
    "kernel-default-6.4.0-1.1.x86_64.rpm",
    "kernel-default-6.4.0-1.1.src.rpm",
    "kernel-default-devel-6.4.0-1.1.x86_64.rpm",
    "standard/extra.rpm",
    "build.log",
    "SLES-16.0-x86_64.iso",
];

#[test]
fn realistic_binary_listing() {
    let kept = filter_artifacts(LISTING, "standard", &rules());
    assert_eq!(
        kept,
        vec![
            "kernel-default-6.4.0-1.1.x86_64.rpm",
            "kernel-default-devel-6.4.0-1.1.x86_64.rpm",
            "standard/extra.rpm",
            "SLES-16.0-x86_64.iso",
        ]
    );
}

#[test]
fn every_kept_line_satisfies_the_rules() {
    let rules = rules();
    for kept in filter_artifacts(LISTING, "standard", &rules) {
        assert_ne!(kept, "standard/");
        assert!(!rules.invalid_prefixes.iter().any(|p| kept.starts_with(p.as_str())));
        assert!(!rules.invalid_extensions.iter().any(|e| kept.ends_with(e.as_str())));
    }
}

#[test]
fn kept_lines_are_a_subsequence_of_the_input() {
    let kept = filter_artifacts(LISTING, "standard", &rules());
    let mut input = LISTING.iter();
    for line in &kept {
        assert!(input.any(|candidate| *candidate == line.as_str()), "{line} out of order");
    }
}

#[test]
fn other_repository_markers_are_kept() {
    let kept = filter_artifacts(&["images/", "standard/"], "images", &ExclusionRules::default());
    assert_eq!(kept, vec!["standard/"]);
}

#[test]
fn accepts_matches_filter() {
    let rules = rules();
    let filter = ArtifactFilter::new("standard", &rules);
    let kept = filter_artifacts(LISTING, "standard", &rules);
    for line in LISTING {
        assert_eq!(filter.accepts(line), kept.iter().any(|k| k == *line), "{line}");
    }
}
