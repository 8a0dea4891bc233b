use std::path::Path;

use anyhow::{Context, Result};
use jiff::Timestamp;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::config::{Config, ImagePolicy};
use crate::error::RowError;
use crate::helpers::{format_ether, read_input};
use crate::models::{CommentPreview, Story, StoryRow};
use crate::normalize::{
    ReferrerTable, TruncateOptions, add_or_update_referrer_with, extract_domain,
    format_distance_abbrev_from, truncate_comment, truncate_long_words,
};

/// Everything a row needs besides the story itself.
pub struct RowContext {
    pub referrers: ReferrerTable,
    pub truncate: TruncateOptions,
    pub images: ImagePolicy,
    pub now: Timestamp,
}

impl RowContext {
    pub fn from_config(config: &Config, now: Timestamp) -> Self {
        Self {
            referrers: config.referrer_table(),
            truncate: config.truncate,
            images: config.image_policy(),
            now,
        }
    }
}

/// Reads a JSON array of stories from `file`, or stdin, and builds their rows.
pub fn run(file: Option<&Path>, config: &Config) -> Result<Vec<StoryRow>> {
    let input = read_input(file)?;
    let stories: Vec<Story> =
        serde_json::from_str(&input).context("Failed to parse stories as a JSON array")?;

    let ctx = RowContext::from_config(config, Timestamp::now());
    Ok(build_rows(&stories, &ctx))
}

/// Builds a row per story. Stories that cannot be rendered are logged and
/// left out so one bad entry never takes the whole feed down.
pub fn build_rows(stories: &[Story], ctx: &RowContext) -> Vec<StoryRow> {
    stories
        .iter()
        .filter_map(|story| match build_row(story, ctx) {
            Ok(row) => Some(row),
            Err(err) => {
                warn!(index = %story.index, href = %story.href, %err, "skipping story row");
                None
            }
        })
        .collect()
}

pub fn build_row(story: &Story, ctx: &RowContext) -> Result<StoryRow, RowError> {
    let domain = extract_domain(&story.href)?;
    let tagged = add_or_update_referrer_with(&ctx.referrers, &story.href, story.identity.as_deref())?;

    let posted_at = Timestamp::from_second(story.timestamp).map_err(|source| RowError::Timestamp {
        timestamp: story.timestamp,
        source,
    })?;

    let image = story
        .image()
        .filter(|image| ctx.images.allows(&domain, image))
        .map(str::to_owned);
    if image.is_none() && story.image().is_some() {
        debug!(index = %story.index, %domain, "preview image blocked");
    }

    let price_eth = if story.is_ad() {
        story.price_wei().map(format_ether)
    } else {
        None
    };

    let comment_preview = story.last_comment.as_ref().and_then(|comment| {
        let avatar = comment
            .identity
            .safe_avatar
            .as_deref()
            .filter(|avatar| !avatar.is_empty())?;
        Some(CommentPreview {
            author: comment.identity.display_name.clone(),
            avatar: avatar.to_owned(),
            text: truncate_comment(&comment.title, &ctx.truncate),
        })
    });

    Ok(StoryRow {
        index: story.index.clone(),
        title: truncate_long_words(&story.title, ctx.truncate.word_max_length),
        domain,
        outbound: outbound_path(&tagged),
        story_path: format!("/stories?index=0x{}", story.index),
        age: format_distance_abbrev_from(posted_at, ctx.now),
        submitter: story.display_name.clone(),
        sponsored: story.is_ad(),
        price_eth,
        image,
        comment_preview,
    })
}

fn outbound_path(link: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(link.as_bytes()).collect();
    format!("/outbound?url={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommentIdentity, LastComment, Metadata};
    use rstest::{fixture, rstest};
    use serde_json::json;

    const NOW: i64 = 1_718_452_800; // 2024-06-15T12:00:00Z

    #[fixture]
    fn ctx() -> RowContext {
        RowContext::from_config(&Config::default(), Timestamp::from_second(NOW).unwrap())
    }

    fn make_story(index: &str, href: &str) -> Story {
        Story {
            index: index.to_string(),
            title: "A story".to_string(),
            href: href.to_string(),
            timestamp: NOW - 5 * 3600,
            identity: None,
            display_name: "alice".to_string(),
            metadata: None,
            collateral: None,
            price: None,
            last_comment: None,
        }
    }

    #[rstest]
    fn plain_story(ctx: RowContext) {
        let row = build_row(&make_story("ab", "https://blog.example.com/post"), &ctx).unwrap();
        assert_eq!(row.domain, "example.com");
        assert_eq!(
            row.outbound,
            "/outbound?url=https%3A%2F%2Fblog.example.com%2Fpost"
        );
        assert_eq!(row.story_path, "/stories?index=0xab");
        assert_eq!(row.age, "5h");
        assert_eq!(row.submitter, "alice");
        assert!(!row.sponsored);
        assert!(row.price_eth.is_none());
        assert!(row.comment_preview.is_none());
    }

    #[rstest]
    fn outbound_link_carries_referrer(ctx: RowContext) {
        let mut story = make_story("ab", "https://foo.mirror.xyz/a");
        story.identity = Some("0xABC".to_string());
        let row = build_row(&story, &ctx).unwrap();
        assert_eq!(
            row.outbound,
            "/outbound?url=https%3A%2F%2Ffoo.mirror.xyz%2Fa%3FreferrerAddress%3D0xABC"
        );
    }

    #[rstest]
    fn long_title_words_are_cut(ctx: RowContext) {
        let mut story = make_story("ab", "https://example.com");
        story.title = "Announcing supercalifragilisticexpialidocious".to_string();
        let row = build_row(&story, &ctx).unwrap();
        assert_eq!(row.title, "Announcing supercalifragilistic...");
    }

    #[rstest]
    #[case::allowed("https://example.com/post", "https://example.com/og.png", true)]
    #[case::blocked_domain("https://team.notion.site/doc", "https://notion.so/og.png", false)]
    #[case::known_bad("https://paragraph.xyz/@a/b", "https://paragraph.xyz/share/share_img.jpg", false)]
    fn preview_image_policy(
        ctx: RowContext,
        #[case] href: &str,
        #[case] image: &str,
        #[case] shown: bool,
    ) {
        let mut story = make_story("ab", href);
        story.metadata = Some(Metadata {
            image: Some(image.to_string()),
        });
        let row = build_row(&story, &ctx).unwrap();
        assert_eq!(row.image.is_some(), shown);
    }

    #[rstest]
    fn sponsored_story_shows_price(ctx: RowContext) {
        let mut story = make_story("ab", "https://example.com");
        story.collateral = Some(json!("1000"));
        story.price = Some(json!("12345600000000000"));
        let row = build_row(&story, &ctx).unwrap();
        assert!(row.sponsored);
        assert_eq!(row.price_eth.as_deref(), Some("0.0123"));
    }

    #[rstest]
    fn price_without_collateral_is_hidden(ctx: RowContext) {
        let mut story = make_story("ab", "https://example.com");
        story.price = Some(json!("12345600000000000"));
        assert!(build_row(&story, &ctx).unwrap().price_eth.is_none());
    }

    #[rstest]
    #[case::with_avatar(Some("https://example.com/bob.png"), true)]
    #[case::empty_avatar(Some(""), false)]
    #[case::no_avatar(None, false)]
    fn comment_preview_needs_avatar(
        ctx: RowContext,
        #[case] avatar: Option<&str>,
        #[case] shown: bool,
    ) {
        let mut story = make_story("ab", "https://example.com");
        story.last_comment = Some(LastComment {
            title: "First line\n\nsecond paragraph".to_string(),
            identity: CommentIdentity {
                display_name: "bob".to_string(),
                safe_avatar: avatar.map(str::to_owned),
            },
        });
        let row = build_row(&story, &ctx).unwrap();
        assert_eq!(row.comment_preview.is_some(), shown);
        if let Some(preview) = row.comment_preview {
            assert_eq!(preview.author, "bob");
            assert_eq!(preview.text, "First line");
        }
    }

    #[rstest]
    fn malformed_href_is_an_error(ctx: RowContext) {
        let err = build_row(&make_story("ab", "not a url"), &ctx).unwrap_err();
        assert!(matches!(err, RowError::Link(_)));
    }

    #[rstest]
    fn out_of_range_timestamp_is_an_error(ctx: RowContext) {
        let mut story = make_story("ab", "https://example.com");
        story.timestamp = i64::MAX;
        let err = build_row(&story, &ctx).unwrap_err();
        assert!(matches!(err, RowError::Timestamp { .. }));
    }

    // A bad row is skipped; its neighbours still render in order.
    #[rstest]
    fn build_rows_skips_broken_stories(ctx: RowContext) {
        let stories = vec![
            make_story("01", "https://a.com"),
            make_story("02", ""),
            make_story("03", "https://b.com"),
        ];
        let rows = build_rows(&stories, &ctx);
        let indexes: Vec<&str> = rows.iter().map(|r| r.index.as_str()).collect();
        assert_eq!(indexes, vec!["01", "03"]);
    }
}
