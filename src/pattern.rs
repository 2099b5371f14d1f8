//! 패턴 매칭 모듈
//!
//! 폴더 안의 항목 중 처리 대상이 되는 파일 이름을 glob 패턴으로 골라냅니다.

use glob::Pattern;

use crate::config::InputKind;
use crate::error::{DecafError, Result};

/// 입력 종류별로 컴파일된 파일 이름 필터
#[derive(Debug, Clone)]
pub struct EligibilityFilter {
    patterns: Vec<Pattern>,
}

impl EligibilityFilter {
    /// 입력 종류에 맞는 필터 생성
    ///
    /// # Examples
    /// ```
    /// use decaf::config::InputKind;
    /// use decaf::pattern::EligibilityFilter;
    ///
    /// let filter = EligibilityFilter::for_kind(InputKind::Convert);
    /// assert!(filter.matches("app.coffee"));
    /// assert!(filter.matches("README.coffee.md"));
    /// assert!(!filter.matches("app.js"));
    /// ```
    pub fn for_kind(kind: InputKind) -> Self {
        let patterns = kind
            .extensions()
            .iter()
            .filter_map(|ext| Pattern::new(&format!("*{}", Pattern::escape(ext))).ok())
            .collect();

        Self { patterns }
    }

    /// 임의의 glob 패턴 목록으로 필터 생성
    ///
    /// # Returns
    /// 컴파일된 `EligibilityFilter` 또는 에러
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|_| DecafError::InvalidPattern {
                    pattern: p.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// 파일 이름이 패턴 중 하나와 일치하는지 확인
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }
}
