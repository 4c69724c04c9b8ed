//! 产品编号（артикул）值对象

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 产品编号最大长度
const MAX_LENGTH: usize = 50;

/// 产品编号错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("Article must not be empty")]
    Empty,
    #[error("Article must not exceed {MAX_LENGTH} characters")]
    TooLong,
}

/// 产品编号值对象
///
/// 业务规则:
/// - 去除首尾空白后不能为空
/// - 最大长度 50 字符
/// - 保留原始大小写
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Article(String);

impl Article {
    pub fn new(article: impl Into<String>) -> Result<Self, ArticleError> {
        let article = article.into().trim().to_string();

        if article.is_empty() {
            return Err(ArticleError::Empty);
        }

        if article.chars().count() > MAX_LENGTH {
            return Err(ArticleError::TooLong);
        }

        Ok(Self(article))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Article {
    type Error = ArticleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Article> for String {
    fn from(article: Article) -> Self {
        article.0
    }
}
