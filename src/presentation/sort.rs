use super::time::timestamp_millis;
use crate::models::{PackageSummary, VersionDetail};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    Name,
    #[default]
    Updated,
    Builds,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Name, SortMode::Updated, SortMode::Builds];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Updated => "updated",
            SortMode::Builds => "builds",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortMode::Name),
            "updated" => Ok(SortMode::Updated),
            "builds" => Ok(SortMode::Builds),
            other => Err(format!("unknown sort mode '{other}'")),
        }
    }
}

/// Orders packages in place. The sort is stable: equal keys keep their
/// relative order.
pub fn sort_packages<T: Borrow<PackageSummary>>(packages: &mut [T], mode: SortMode) {
    match mode {
        SortMode::Name => {
            packages.sort_by(|a, b| compare_names(&a.borrow().name, &b.borrow().name))
        }
        SortMode::Updated => packages.sort_by_cached_key(|p| {
            std::cmp::Reverse(timestamp_millis(p.borrow().updated_at.as_deref()))
        }),
        SortMode::Builds => {
            packages.sort_by_key(|p| std::cmp::Reverse(p.borrow().build_count))
        }
    }
}

/// Collation class of a character: punctuation and spaces, then digits,
/// then letters.
fn char_class(c: char) -> u8 {
    if c.is_ascii_digit() {
        1
    } else if c.is_alphanumeric() {
        2
    } else {
        0
    }
}

fn collation_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Collation-style name order: punctuation before digits before letters,
/// case ignored first, then lowercase before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| b.cmp(a))
}

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    })
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_chunks(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
        (Chunk::Text(x), Chunk::Text(y)) => compare_names(x, y),
        // Same class order as compare_names
        (Chunk::Digits(_), Chunk::Text(t)) => match t.chars().next().map(char_class) {
            Some(0) => Ordering::Greater,
            _ => Ordering::Less,
        },
        (Chunk::Text(_), Chunk::Digits(_)) => compare_chunks(b, a).reverse(),
    }
}

/// Numeric-aware version order: digit runs compare as numbers, everything
/// else as text. No semver precedence rules apply, so `1.0.0-beta` sorts
/// after `1.0.0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_chunks(&x, &y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

/// Newest version first, for the versions table
pub fn sort_versions<T: Borrow<VersionDetail>>(versions: &mut [T]) {
    versions.sort_by(|a, b| compare_versions(&b.borrow().version, &a.borrow().version));
}
