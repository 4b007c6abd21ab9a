use std::sync::Arc;

use super::ArticleAssembler;
use crate::domain::{article::Article, repository::Repository};

pub struct ArticleQueryService {
    pub(super) articles: Arc<dyn Repository<Article>>,
    pub(super) assembler: Arc<ArticleAssembler>,
}

impl ArticleQueryService {
    pub fn new(articles: Arc<dyn Repository<Article>>, assembler: Arc<ArticleAssembler>) -> Self {
        Self {
            articles,
            assembler,
        }
    }
}
