//! Release tag summaries.

use serde::Serialize;
use tracing::debug;

use crate::github::{Commit, GatewayError, RepositoryGateway, RepositoryLocator, Tag};

/// Author shown when a commit cannot be attributed to a GitHub account.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// One row of the releases page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// Tag name.
    pub tag_name: String,
    /// Message of the tagged commit.
    pub commit_message: String,
    /// Login of the commit author, or [`UNKNOWN_AUTHOR`].
    pub commit_author: String,
}

impl TagSummary {
    /// Combines a tag with its resolved commit.
    #[must_use]
    pub fn from_parts(tag: &Tag, commit: Commit) -> Self {
        Self {
            tag_name: tag.name.clone(),
            commit_message: commit.message,
            commit_author: commit
                .author_login
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_owned()),
        }
    }
}

/// Resolves the commit behind each tag and summarises it.
///
/// The output has one entry per tag, in the same order.
///
/// # Errors
///
/// Propagates the first gateway failure while resolving commits.
pub async fn summarize_tags<G>(
    gateway: &G,
    locator: &RepositoryLocator,
    tags: &[Tag],
) -> Result<Vec<TagSummary>, GatewayError>
where
    G: RepositoryGateway + ?Sized,
{
    let mut summaries = Vec::with_capacity(tags.len());
    for tag in tags {
        let commit = gateway.commit(locator, &tag.commit_sha).await?;
        summaries.push(TagSummary::from_parts(tag, commit));
    }
    debug!(repository = %locator, tags = summaries.len(), "summarised tags");
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::{always, eq};
    use rstest::{fixture, rstest};

    use super::{TagSummary, UNKNOWN_AUTHOR, summarize_tags};
    use crate::github::{
        Commit, FakeGateway, GatewayError, MockRepositoryGateway, RepositoryLocator, Tag,
    };

    #[fixture]
    fn locator() -> RepositoryLocator {
        RepositoryLocator::from_owner_repo("octo", "repo").expect("locator should be valid")
    }

    fn tag(name: &str) -> Tag {
        Tag {
            name: name.to_owned(),
            commit_sha: format!("{name}-sha"),
        }
    }

    #[rstest]
    #[case::attributed(Some("alice"), "alice")]
    #[case::unattributed(None, UNKNOWN_AUTHOR)]
    fn from_parts_fills_author(#[case] login: Option<&str>, #[case] expected: &str) {
        let commit = Commit {
            sha: "v1-sha".to_owned(),
            message: "Release v1".to_owned(),
            author_login: login.map(ToOwned::to_owned),
        };

        let summary = TagSummary::from_parts(&tag("v1"), commit);

        assert_eq!(summary.tag_name, "v1");
        assert_eq!(summary.commit_message, "Release v1");
        assert_eq!(summary.commit_author, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn summaries_follow_tag_order(locator: RepositoryLocator) {
        let gateway = FakeGateway::new()
            .with_tag("octo", "repo", "v2.0.0", "Second release", Some("bob"))
            .with_tag("octo", "repo", "v1.0.0", "First release", None);
        let tags = vec![tag("v2.0.0"), tag("v1.0.0")];

        let summaries = summarize_tags(&gateway, &locator, &tags)
            .await
            .expect("summaries should resolve");

        assert_eq!(
            summaries,
            vec![
                TagSummary {
                    tag_name: "v2.0.0".to_owned(),
                    commit_message: "Second release".to_owned(),
                    commit_author: "bob".to_owned(),
                },
                TagSummary {
                    tag_name: "v1.0.0".to_owned(),
                    commit_message: "First release".to_owned(),
                    commit_author: UNKNOWN_AUTHOR.to_owned(),
                },
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn no_tags_yields_no_summaries(locator: RepositoryLocator) {
        let gateway = MockRepositoryGateway::new();

        let summaries = summarize_tags(&gateway, &locator, &[])
            .await
            .expect("summaries should resolve");

        assert!(summaries.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn resolves_each_tagged_commit(locator: RepositoryLocator) {
        let mut gateway = MockRepositoryGateway::new();
        gateway
            .expect_commit()
            .with(always(), eq("abc"))
            .times(1)
            .returning(|_, sha| {
                Ok(Commit {
                    sha: sha.to_owned(),
                    message: "Tagged".to_owned(),
                    author_login: None,
                })
            });
        let tags = vec![Tag {
            name: "v0.1.0".to_owned(),
            commit_sha: "abc".to_owned(),
        }];

        let summaries = summarize_tags(&gateway, &locator, &tags)
            .await
            .expect("summaries should resolve");

        assert_eq!(summaries.len(), 1);
        assert!(summaries.iter().all(|summary| !summary.commit_author.is_empty()));
    }

    #[rstest]
    #[tokio::test]
    async fn commit_failures_propagate(locator: RepositoryLocator) {
        let mut gateway = MockRepositoryGateway::new();
        gateway.expect_commit().returning(|_, _| {
            Err(GatewayError::Api {
                message: "server error".to_owned(),
            })
        });

        let result = summarize_tags(&gateway, &locator, &[tag("v1")]).await;

        assert!(
            matches!(result, Err(GatewayError::Api { .. })),
            "expected Api error, got {result:?}"
        );
    }
}
