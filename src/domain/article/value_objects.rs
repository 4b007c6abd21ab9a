use crate::domain::text::bounded_text;

bounded_text!(ArticleTitle, "title", 128);
bounded_text!(ArticleContent, "content", 1_000_000);
