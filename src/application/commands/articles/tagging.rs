// src/application/commands/articles/tagging.rs
use std::collections::HashSet;

use super::ArticleCommandService;
use crate::{
    application::{commands::cascade::remove_matching, error::ApplicationResult},
    domain::{
        article::{ArticleTag, tagging},
        entity::EntityId,
        query::Filter,
    },
};

impl ArticleCommandService {
    /// Creates an edge for every submitted tag id that resolves to a tag.
    /// Malformed, unknown and repeated ids are skipped.
    pub(super) async fn attach_tags(
        &self,
        article_id: EntityId,
        raw_tag_ids: &[String],
    ) -> ApplicationResult<usize> {
        let mut seen = HashSet::new();
        let mut attached = 0;

        for raw in raw_tag_ids {
            let Ok(tag_id) = EntityId::parse(raw) else {
                tracing::warn!(%article_id, tag_id = %raw, "skipping malformed tag id");
                continue;
            };
            if !seen.insert(tag_id) {
                continue;
            }
            if self.tags.get_by_id(tag_id).await?.is_none() {
                tracing::warn!(%article_id, %tag_id, "skipping unknown tag id");
                continue;
            }

            self.article_tags
                .create(ArticleTag::new(article_id, tag_id))
                .await?;
            attached += 1;
        }

        Ok(attached)
    }

    /// Drops every existing edge of the article, then attaches the given tags.
    pub(super) async fn replace_tags(
        &self,
        article_id: EntityId,
        raw_tag_ids: &[String],
    ) -> ApplicationResult<usize> {
        self.detach_all_tags(article_id).await?;
        self.attach_tags(article_id, raw_tag_ids).await
    }

    pub(super) async fn detach_all_tags(&self, article_id: EntityId) -> ApplicationResult<usize> {
        remove_matching(
            self.article_tags.as_ref(),
            Filter::eq(tagging::ARTICLE_ID, article_id),
        )
        .await
    }
}
