// src/application/queries/articles/assembler.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, CommentDto, TagDto},
        error::ApplicationResult,
    },
    domain::{
        article::{Article, ArticleTag, tagging},
        comment::{self, Comment},
        entity::{Entity, EntityId},
        query::{Filter, OrderKey},
        repository::{DEFAULT_LIST_LIMIT, Repository},
        tag::Tag,
        user::User,
    },
};

/// Builds an [`ArticleDto`] by resolving the article's tags, author and
/// comments, one repository round trip at a time.
pub struct ArticleAssembler {
    article_tags: Arc<dyn Repository<ArticleTag>>,
    tags: Arc<dyn Repository<Tag>>,
    users: Arc<dyn Repository<User>>,
    comments: Arc<dyn Repository<Comment>>,
}

impl ArticleAssembler {
    pub fn new(
        article_tags: Arc<dyn Repository<ArticleTag>>,
        tags: Arc<dyn Repository<Tag>>,
        users: Arc<dyn Repository<User>>,
        comments: Arc<dyn Repository<Comment>>,
    ) -> Self {
        Self {
            article_tags,
            tags,
            users,
            comments,
        }
    }

    pub async fn assemble(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let tags = self.resolve_tags(article.id()).await?;
        let author_name = self.resolve_author_name(&article).await?;
        let comments = self.resolve_comments(article.id()).await?;
        Ok(ArticleDto::from_parts(article, author_name, comments, tags))
    }

    pub async fn assemble_all(&self, articles: Vec<Article>) -> ApplicationResult<Vec<ArticleDto>> {
        let mut assembled = Vec::with_capacity(articles.len());
        for article in articles {
            assembled.push(self.assemble(article).await?);
        }
        Ok(assembled)
    }

    async fn resolve_tags(&self, article_id: EntityId) -> ApplicationResult<Vec<TagDto>> {
        let edges = self
            .article_tags
            .get_all_where(
                Filter::eq(tagging::ARTICLE_ID, article_id),
                OrderKey::CreatedAt,
                DEFAULT_LIST_LIMIT,
            )
            .await?;

        let mut tags = Vec::with_capacity(edges.len());
        for edge in edges {
            match self.tags.get_by_id(edge.tag_id).await? {
                Some(tag) => tags.push(TagDto::from(tag)),
                None => tracing::warn!(%article_id, tag_id = %edge.tag_id, "article tag edge points at a missing tag"),
            }
        }
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn resolve_author_name(&self, article: &Article) -> ApplicationResult<Option<String>> {
        let author = self.users.get_by_id(article.author_id).await?;
        if author.is_none() {
            tracing::warn!(
                article_id = %article.id(),
                author_id = %article.author_id,
                "article references a missing author"
            );
        }
        Ok(author.map(|user| user.display_name()))
    }

    async fn resolve_comments(&self, article_id: EntityId) -> ApplicationResult<Vec<CommentDto>> {
        let comments = self
            .comments
            .get_all_where(
                Filter::eq(comment::ARTICLE_ID, article_id),
                OrderKey::CreatedAt,
                DEFAULT_LIST_LIMIT,
            )
            .await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
