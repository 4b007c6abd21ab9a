use crate::domain::{errors::DomainError, tag::TAG_EXISTS};

const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_ARTICLE_TAG_PAIR: &str = "article_tags_pkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_ARTICLE_TAG_ARTICLE: &str = "article_tags_article_id_fkey";
const CNT_ARTICLE_TAG_TAG: &str = "article_tags_tag_id_fkey";

const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps errors from inserts, updates and reads. A foreign key failure here
/// means the referenced row is missing.

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_TAG_NAME => DomainError::Conflict(TAG_EXISTS.into()),
                    CNT_ARTICLE_TAG_PAIR => {
                        DomainError::Conflict("article already carries this tag".into())
                    }
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_COMMENT_ARTICLE | CNT_ARTICLE_TAG_ARTICLE => {
                        DomainError::NotFound("article not found".into())
                    }
                    CNT_ARTICLE_TAG_TAG => DomainError::NotFound("tag not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Describes why a `DELETE` of a `kind` row failed. A foreign key failure on
/// delete means other rows still point at it, not that anything is missing.
pub fn describe_delete_failure(kind: &str, err: sqlx::Error) -> String {
    let referenced = match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
        {
            Some(still_referenced(kind, db_err.constraint()))
        }
        _ => None,
    };
    referenced.unwrap_or_else(|| map_sqlx(err).to_string())
}

fn still_referenced(kind: &str, constraint: Option<&str>) -> String {
    match constraint {
        Some(constraint) => format!("{kind} is still referenced ({constraint})"),
        None => format!("{kind} is still referenced"),
    }
}
