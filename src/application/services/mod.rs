// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            tags::TagCommandService, users::UserCommandService,
        },
        queries::{
            articles::{ArticleAssembler, ArticleQueryService},
            comments::CommentQueryService,
            tags::TagQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{Article, ArticleTag},
        comment::Comment,
        repository::Repository,
        tag::Tag,
        user::User,
    },
};

/// One repository per stored entity kind.
#[derive(Clone)]
pub struct Repositories {
    pub articles: Arc<dyn Repository<Article>>,
    pub article_tags: Arc<dyn Repository<ArticleTag>>,
    pub comments: Arc<dyn Repository<Comment>>,
    pub tags: Arc<dyn Repository<Tag>>,
    pub users: Arc<dyn Repository<User>>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub tag_commands: Arc<TagCommandService>,
    pub tag_queries: Arc<TagQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories) -> Self {
        let assembler = Arc::new(ArticleAssembler::new(
            Arc::clone(&repos.article_tags),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.users),
            Arc::clone(&repos.comments),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.articles),
            Arc::clone(&repos.article_tags),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.tags),
            Arc::clone(&repos.users),
            Arc::clone(&assembler),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.articles),
            Arc::clone(&assembler),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.articles),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&repos.comments)));

        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&repos.tags),
            Arc::clone(&repos.article_tags),
        ));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&repos.tags)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.articles),
        ));
        let user_queries = Arc::new(UserQueryService::new(repos.users));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            tag_commands,
            tag_queries,
            user_commands,
            user_queries,
        }
    }
}
