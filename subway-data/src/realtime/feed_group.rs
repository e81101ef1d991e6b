//! The agency's realtime feed groups.

use std::fmt;
use std::str::FromStr;

/// One of the subway feed groups. Each group covers a fixed set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedGroup {
    /// 1 2 3 4 5 6 7 and the 42 St shuttle
    Numbered,
    Ace,
    Bdfm,
    G,
    Jz,
    Nqrw,
    L,
    /// Staten Island Railway
    Sir,
}

impl FeedGroup {
    pub const ALL: [FeedGroup; 8] = [
        FeedGroup::Numbered,
        FeedGroup::Ace,
        FeedGroup::Bdfm,
        FeedGroup::G,
        FeedGroup::Jz,
        FeedGroup::Nqrw,
        FeedGroup::L,
        FeedGroup::Sir,
    ];

    /// Path segment appended to the feed base URL.
    pub fn path(self) -> &'static str {
        match self {
            FeedGroup::Numbered => "nyct%2Fgtfs",
            FeedGroup::Ace => "nyct%2Fgtfs-ace",
            FeedGroup::Bdfm => "nyct%2Fgtfs-bdfm",
            FeedGroup::G => "nyct%2Fgtfs-g",
            FeedGroup::Jz => "nyct%2Fgtfs-jz",
            FeedGroup::Nqrw => "nyct%2Fgtfs-nqrw",
            FeedGroup::L => "nyct%2Fgtfs-l",
            FeedGroup::Sir => "nyct%2Fgtfs-si",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeedGroup::Numbered => "numbered",
            FeedGroup::Ace => "ace",
            FeedGroup::Bdfm => "bdfm",
            FeedGroup::G => "g",
            FeedGroup::Jz => "jz",
            FeedGroup::Nqrw => "nqrw",
            FeedGroup::L => "l",
            FeedGroup::Sir => "sir",
        }
    }

    /// Line codes whose trips appear in this group.
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            FeedGroup::Numbered => &["1", "2", "3", "4", "5", "5X", "6", "6X", "7", "7X", "S", "GS"],
            FeedGroup::Ace => &["A", "C", "E", "H", "FS"],
            FeedGroup::Bdfm => &["B", "D", "F", "FX", "M"],
            FeedGroup::G => &["G"],
            FeedGroup::Jz => &["J", "Z"],
            FeedGroup::Nqrw => &["N", "Q", "R", "W"],
            FeedGroup::L => &["L"],
            FeedGroup::Sir => &["SI", "SIR"],
        }
    }

    /// The group carrying `line`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_data::realtime::FeedGroup;
    ///
    /// assert_eq!(FeedGroup::for_route("Q"), Some(FeedGroup::Nqrw));
    /// assert_eq!(FeedGroup::for_route("6X"), Some(FeedGroup::Numbered));
    /// assert_eq!(FeedGroup::for_route("T"), None);
    /// ```
    pub fn for_route(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.lines().contains(&line))
    }
}

impl fmt::Display for FeedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A feed group name that matched none of the known groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feed group {0:?}")]
pub struct UnknownFeedGroup(pub String);

impl FromStr for FeedGroup {
    type Err = UnknownFeedGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.name() == lower)
            .ok_or_else(|| UnknownFeedGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_line_has_a_group() {
        let table = crate::domain::RouteTable::nyc_subway();
        for line in table.lines() {
            assert!(FeedGroup::for_route(line).is_some(), "{line} has no feed");
        }
    }

    #[test]
    fn lines_belong_to_one_group() {
        for group in FeedGroup::ALL {
            for line in group.lines() {
                assert_eq!(FeedGroup::for_route(line), Some(group));
            }
        }
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("BDFM".parse::<FeedGroup>(), Ok(FeedGroup::Bdfm));
        assert_eq!("numbered".parse::<FeedGroup>(), Ok(FeedGroup::Numbered));
        assert_eq!(
            "xyz".parse::<FeedGroup>(),
            Err(UnknownFeedGroup("xyz".into()))
        );
        for group in FeedGroup::ALL {
            assert_eq!(group.to_string().parse::<FeedGroup>(), Ok(group));
        }
    }

    #[test]
    fn paths() {
        assert_eq!(FeedGroup::Numbered.path(), "nyct%2Fgtfs");
        assert_eq!(FeedGroup::Sir.path(), "nyct%2Fgtfs-si");
    }
}
