// src/application/queries/articles/list.rs
use std::str::FromStr;

use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleListCursor, errors::DomainError},
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    Newest,
    Trending,
}

impl FromStr for ArticleSort {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(ArticleSort::Newest),
            "trending" => Ok(ArticleSort::Trending),
            other => Err(ApplicationError::validation(format!(
                "unknown sort '{other}'"
            ))),
        }
    }
}

pub struct ListArticlesQuery {
    pub limit: u32,
    pub cursor: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let sort = match query.sort.as_deref() {
            Some(value) => value.parse::<ArticleSort>()?,
            None => ArticleSort::default(),
        };
        let limit = normalize_limit(query.limit);
        let visibility = self.resolve_visibility(actor).await?;
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        match sort {
            ArticleSort::Newest => {
                let cursor = self.decode_cursor(query.cursor.as_deref())?;
                let (records, next_cursor) = self
                    .read_repo
                    .list_page(&visibility, limit, cursor, search)
                    .await?;
                let items = records.into_iter().map(Into::into).collect();
                Ok(CursorPage::new(
                    items,
                    next_cursor.map(|cursor| cursor.encode()),
                ))
            }
            ArticleSort::Trending => {
                if query.cursor.is_some() {
                    return Err(ApplicationError::validation(
                        "trending listing does not paginate",
                    ));
                }
                let records = self
                    .read_repo
                    .list_trending(&visibility, limit, self.trending)
                    .await?;
                Ok(CursorPage::new(
                    records.into_iter().map(Into::into).collect(),
                    None,
                ))
            }
        }
    }

    pub(super) fn decode_cursor(
        &self,
        token: Option<&str>,
    ) -> ApplicationResult<Option<ArticleListCursor>> {
        match token {
            Some(value) => match ArticleListCursor::decode(value) {
                Ok(cursor) => Ok(Some(cursor)),
                Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
                Err(other) => Err(ApplicationError::from(other)),
            },
            None => Ok(None),
        }
    }
}

fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
