// src/application/commands/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{cascade::remove_matching, expect_deleted},
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleTag, tagging},
        entity::{EntityId, ID_FIELD},
        query::{Filter, OrderKey},
        repository::Repository,
        tag::{self, TAG_EXISTS, Tag, TagName},
    },
};

pub struct CreateTagCommand {
    pub name: String,
}

pub struct UpdateTagCommand {
    pub id: String,
    pub name: String,
}

pub struct DeleteTagCommand {
    pub id: String,
}

pub struct TagCommandService {
    tags: Arc<dyn Repository<Tag>>,
    article_tags: Arc<dyn Repository<ArticleTag>>,
}

impl TagCommandService {
    pub fn new(tags: Arc<dyn Repository<Tag>>, article_tags: Arc<dyn Repository<ArticleTag>>) -> Self {
        Self { tags, article_tags }
    }

    /// Fails with `Conflict("TAG_EXISTS")` when the name is already taken.
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<EntityId> {
        let name = TagName::new(command.name)?;
        self.ensure_name_free(&name, Filter::All).await?;

        let id = self.tags.create(Tag::new(name)).await?;
        tracing::debug!(tag_id = %id, "tag created");
        Ok(id)
    }

    pub async fn update_tag(&self, command: UpdateTagCommand) -> ApplicationResult<TagDto> {
        let id = EntityId::parse(&command.id)?;
        let name = TagName::new(command.name)?;

        let mut tag = self
            .tags
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
        self.ensure_name_free(&name, Filter::ne(ID_FIELD, id)).await?;

        tag.rename(name);
        let updated = self.tags.update(tag).await?;
        Ok(updated.into())
    }

    /// Removes the tag's article edges first, then the tag.
    pub async fn delete_tag(&self, command: DeleteTagCommand) -> ApplicationResult<EntityId> {
        let id = EntityId::parse(&command.id)?;
        remove_matching(self.article_tags.as_ref(), Filter::eq(tagging::TAG_ID, id)).await?;
        expect_deleted(self.tags.delete(id).await, "tag")?;
        Ok(id)
    }

    async fn ensure_name_free(&self, name: &TagName, scope: Filter) -> ApplicationResult<()> {
        let existing = self
            .tags
            .get_first_where(
                Filter::eq(tag::NAME, name.as_str()).and(scope),
                OrderKey::CreatedAt,
            )
            .await?;

        match existing {
            Some(_) => Err(ApplicationError::conflict(TAG_EXISTS)),
            None => Ok(()),
        }
    }
}
