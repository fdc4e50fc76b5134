//! Unit tests for repository identifiers and listing parameters.

use rstest::rstest;

use super::{
    GatewayError, ListPullRequestsParams, OrganizationName, PersonalAccessToken, PullRequestSort,
    PullRequestState, RepositoryLocator, RepositoryName,
};

#[rstest]
fn builds_rest_paths_for_repository() {
    let locator =
        RepositoryLocator::from_owner_repo("octo", "repo").expect("locator should be valid");

    assert_eq!(locator.pulls_path(), "/repos/octo/repo/pulls");
    assert_eq!(locator.labels_path(12), "/repos/octo/repo/issues/12/labels");
    assert_eq!(locator.tags_path(), "/repos/octo/repo/tags");
    assert_eq!(locator.commit_path("abc"), "/repos/octo/repo/commits/abc");
    assert_eq!(locator.to_string(), "octo/repo");
}

#[rstest]
#[case::blank_owner("", "repo")]
#[case::blank_repo("octo", "")]
#[case::whitespace_repo("octo", "   ")]
fn rejects_blank_identifiers(#[case] owner: &str, #[case] repo: &str) {
    let result = RepositoryLocator::from_owner_repo(owner, repo);
    assert!(
        matches!(result, Err(GatewayError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
#[case::nested_path("api/collaborators/x")]
#[case::current_dir(".")]
#[case::parent_dir("..")]
#[case::query("api?per_page=1")]
#[case::fragment("api#readme")]
#[case::inner_space("my repo")]
fn rejects_identifiers_that_leave_the_path_segment(#[case] name: &str) {
    let result = RepositoryName::new(name);
    assert_eq!(
        result,
        Err(GatewayError::InvalidIdentifier {
            value: name.to_owned()
        })
    );
    assert!(RepositoryLocator::from_owner_repo(name, "repo").is_err());
}

#[rstest]
#[case("api")]
#[case("readyboard.rs")]
#[case("my_repo-2")]
#[case(".github")]
fn accepts_github_repository_names(#[case] name: &str) {
    let repository = RepositoryName::new(name).expect("name should be valid");
    assert_eq!(repository.as_str(), name);
}

#[rstest]
fn organization_builds_repository_locators() {
    let organization = OrganizationName::new("acme").expect("organization should be valid");
    let name = RepositoryName::new("api").expect("name should be valid");

    let locator = organization.repository(name);

    assert_eq!(organization.repos_path(), "/orgs/acme/repos");
    assert_eq!(locator.owner().as_str(), "acme");
    assert_eq!(locator.repository().as_str(), "api");
}

#[rstest]
fn token_is_trimmed_and_redacted() {
    let token = PersonalAccessToken::new("  ghp_secret \n").expect("token should be valid");

    assert_eq!(token.value(), "ghp_secret");
    assert!(
        !format!("{token:?}").contains("ghp_secret"),
        "debug output must not leak the token"
    );
}

#[rstest]
fn blank_token_is_rejected() {
    let result = PersonalAccessToken::new("   ");
    assert!(
        matches!(result, Err(GatewayError::Authentication { .. })),
        "expected Authentication error, got {result:?}"
    );
}

#[rstest]
fn default_params_list_open_pull_requests_only() {
    let params = ListPullRequestsParams::default();

    assert_eq!(params.state, PullRequestState::Open);
    assert_eq!(
        params.query_pairs(100),
        vec![("state", "open".to_owned()), ("per_page", "100".to_owned())]
    );
}

#[rstest]
fn open_against_sorts_by_creation_and_restricts_base() {
    let params = ListPullRequestsParams::open_against("master");

    assert_eq!(params.sort, Some(PullRequestSort::Created));
    assert_eq!(
        params.query_pairs(50),
        vec![
            ("state", "open".to_owned()),
            ("per_page", "50".to_owned()),
            ("sort", "created".to_owned()),
            ("base", "master".to_owned()),
        ]
    );
}

#[rstest]
#[case(PullRequestSort::Created, "created")]
#[case(PullRequestSort::Updated, "updated")]
#[case(PullRequestSort::Popularity, "popularity")]
#[case(PullRequestSort::LongRunning, "long-running")]
fn sort_keys_match_api_values(#[case] sort: PullRequestSort, #[case] expected: &str) {
    assert_eq!(sort.as_str(), expected);
}
