//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT, MAX_PAGE_SIZE};
use crate::domain::DoctorSummary;
use crate::errors::{AppError, AppResult};

/// Pagination query parameters (`?page=0&size=10&sort=name,asc`)
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size, capped at 100
    #[serde(default = "default_size")]
    pub size: u64,
    /// Sort property with optional direction, e.g. `name,desc`
    pub sort: Option<String>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Requested ordering; the property name is resolved by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    /// Parse `property[,asc|desc]`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().unwrap_or_default();
        if property.is_empty() {
            return Err(AppError::invalid_field("sort", "must name a property"));
        }

        let direction = match parts.next() {
            None => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(other) => {
                return Err(AppError::invalid_field(
                    "sort",
                    format!("unknown sort direction '{}'", other),
                ))
            }
        };

        if parts.next().is_some() {
            return Err(AppError::invalid_field("sort", "expected 'property[,direction]'"));
        }

        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

/// Normalized page request handed to repositories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: u64, size: u64, sort: Sort) -> Self {
        Self { page, size, sort }
    }
}

impl TryFrom<PageParams> for PageRequest {
    type Error = AppError;

    fn try_from(params: PageParams) -> AppResult<Self> {
        // Sizes below one fall back to the default rather than erroring
        let size = if params.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            params.size.min(MAX_PAGE_SIZE)
        };

        // The row offset must fit a signed 64-bit SQL OFFSET
        match params.page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(AppError::invalid_field("page", "is out of range")),
        }

        let sort = match params.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Sort::parse(raw)?,
            _ => Sort::asc(DEFAULT_SORT),
        };

        Ok(Self::new(params.page, size, sort))
    }
}

/// One page of results plus its metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(DoctorSummaryPage = Page<DoctorSummary>)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page number
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Create new page
    pub fn new(content: Vec<T>, number: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size)
        } else {
            0
        };

        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }

    /// Convert every element, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_ten_sorted_by_name() {
        let request = PageRequest::try_from(PageParams::default()).unwrap();

        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);
        assert_eq!(request.sort, Sort::asc("name"));
    }

    #[test]
    fn size_is_capped_and_zero_falls_back() {
        let capped = PageRequest::try_from(PageParams {
            size: 5_000,
            ..Default::default()
        })
        .unwrap();
        let zero = PageRequest::try_from(PageParams {
            size: 0,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(capped.size, MAX_PAGE_SIZE);
        assert_eq!(zero.size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn sort_parses_direction() {
        assert_eq!(
            Sort::parse("registration,DESC").unwrap(),
            Sort {
                property: "registration".to_string(),
                direction: Direction::Desc,
            }
        );
        assert!(matches!(
            Sort::parse("name,sideways"),
            Err(AppError::Validation(v)) if v[0].field == "sort"
        ));
        assert!(Sort::parse(",asc").is_err());
    }

    #[test]
    fn page_metadata() {
        let page = Page::new(vec![1, 2], 0, 2, 5);

        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);

        let last = Page::new(vec![5], 2, 2, 5).map(|n| n * 10);
        assert_eq!(last.content, vec![50]);
        assert!(last.last);
    }

    #[test]
    fn page_whose_offset_overflows_is_rejected() {
        for page in [u64::MAX, 1_000_000_000_000_000_000] {
            let result = PageRequest::try_from(PageParams {
                page,
                size: 100,
                ..Default::default()
            });

            assert!(matches!(
                result,
                Err(AppError::Validation(v)) if v[0].field == "page"
            ));
        }

        let furthest = (i64::MAX as u64) / MAX_PAGE_SIZE;
        assert!(PageRequest::try_from(PageParams {
            page: furthest,
            size: MAX_PAGE_SIZE,
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn last_flag_does_not_overflow_on_huge_page_number() {
        let page: Page<u8> = Page::new(vec![], u64::MAX, 10, 3);

        assert!(page.last);
        assert!(!page.first);
    }

    #[test]
    fn empty_page_is_first_and_last() {
        let page: Page<u8> = Page::new(vec![], 0, 10, 0);

        assert_eq!(page.total_pages, 0);
        assert!(page.first && page.last);
    }
}
