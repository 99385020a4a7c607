// search-core/src/filter.rs
//! 结果分组选项
//!
//! 过滤器只是展示提示：它不会改变引擎计算出的结果集。

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterOption {
    #[default]
    All,
    Users,
    Sneakers,
    Posts,
}

impl FilterOption {
    pub fn shows_users(self) -> bool {
        matches!(self, FilterOption::All | FilterOption::Users)
    }

    pub fn shows_sneakers(self) -> bool {
        matches!(self, FilterOption::All | FilterOption::Sneakers)
    }

    pub fn shows_posts(self) -> bool {
        matches!(self, FilterOption::All | FilterOption::Posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("all", FilterOption::All)]
    #[case("users", FilterOption::Users)]
    #[case("Sneakers", FilterOption::Sneakers)]
    #[case("POSTS", FilterOption::Posts)]
    fn test_parse_filter(#[case] input: &str, #[case] expected: FilterOption) {
        assert_eq!(FilterOption::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("user")]
    #[case("listings")]
    fn test_parse_filter_invalid(#[case] input: &str) {
        assert!(FilterOption::from_str(input).is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for option in FilterOption::iter() {
            assert_eq!(FilterOption::from_str(&option.to_string()).unwrap(), option);
        }
    }

    #[test]
    fn test_all_shows_every_kind() {
        let all = FilterOption::All;
        assert!(all.shows_users() && all.shows_sneakers() && all.shows_posts());

        let posts = FilterOption::Posts;
        assert!(!posts.shows_users());
        assert!(!posts.shows_sneakers());
        assert!(posts.shows_posts());
    }
}
