use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn owner(name: &str) -> OwnerName {
    OwnerName::new(name).expect("non-empty owner")
}

#[test]
fn test_parse_organization_project_url() {
    let parsed = ProjectRef::parse("https://github.com/orgs/my-org/projects/5").unwrap();

    assert_eq!(
        parsed,
        ProjectRef {
            owner_type: OwnerType::Organization,
            owner_name: owner("my-org"),
            number: ProjectNumber::new(5),
        }
    );
}

#[test]
fn test_parse_user_project_url() {
    let parsed = ProjectRef::parse("https://github.com/users/alice/projects/3").unwrap();

    assert_eq!(
        parsed,
        ProjectRef {
            owner_type: OwnerType::User,
            owner_name: owner("alice"),
            number: ProjectNumber::new(3),
        }
    );
}

#[test]
fn test_parse_accepts_missing_scheme_and_trailing_path() {
    let parsed = ProjectRef::parse("github.com/orgs/acme/projects/12/views/1").unwrap();

    assert_eq!(parsed.owner_name, owner("acme"));
    assert_eq!(parsed.number, ProjectNumber::new(12));
}

#[rstest]
#[case("https://example.com/foo")]
#[case("https://github.com/teams/core/projects/1")]
#[case("https://github.com/orgs/my-org/projects/")]
#[case("https://github.com/orgs/my-org/projects/abc")]
#[case("http://github.com/orgs/my-org/projects/5")]
#[case("https://github.com/orgs/my-org/projects/99999999999999999999999")]
#[case("")]
fn test_parse_rejects_malformed_urls(#[case] url: &str) {
    let err = ProjectRef::parse(url).unwrap_err();

    assert_eq!(
        err,
        BoardError::InvalidProjectUrl {
            url: url.to_string()
        }
    );
}

#[test]
fn test_parse_error_names_url_and_expected_format() {
    let message = ProjectRef::parse("https://example.com/foo")
        .unwrap_err()
        .to_string();

    assert!(message.contains("https://example.com/foo"));
    assert!(message.contains(crate::errors::PROJECT_URL_FORMAT));
}
