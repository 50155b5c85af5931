//! # Catalog Module
//!
//! The dungeon catalog: every dungeon, its paths, their difficulties, and the
//! paths that are never put on the schedule.
//!
//! Catalog data is plain `static` data. Nothing in the crate mutates it, and
//! selections borrow straight out of it for the lifetime of the process.

pub mod data;

pub use data::*;

use crate::{RollerError, RollerResult, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a dungeon path.
///
/// # Examples
///
/// ```
/// use dungeon_roller::Difficulty;
///
/// assert_eq!(Difficulty::from_level(3), Some(Difficulty::Hard));
/// assert_eq!(Difficulty::Easy.level(), 1);
/// assert_eq!(Difficulty::Medium.label(), "Medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    /// All tiers in announcement order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Numeric difficulty level (1 is easy, 3 is hard).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Converts a numeric level back into a tier.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Capitalized label used in section headings.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A completion route through a dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Path {
    /// Display name of the path
    pub name: &'static str,
    /// Path number within its dungeon; 0 is the story path
    pub number: u8,
    /// Difficulty tier
    pub difficulty: Difficulty,
}

impl Path {
    /// Creates a path. `const` so catalogs can be declared as statics.
    pub const fn new(name: &'static str, number: u8, difficulty: Difficulty) -> Self {
        Self {
            name,
            number,
            difficulty,
        }
    }

    /// Whether this is the dungeon's story path.
    pub fn is_story(&self) -> bool {
        self.number == 0
    }
}

/// A named dungeon and its ordered paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dungeon {
    pub name: &'static str,
    pub paths: &'static [Path],
}

impl Dungeon {
    pub const fn new(name: &'static str, paths: &'static [Path]) -> Self {
        Self { name, paths }
    }

    /// Looks up a path by its number.
    pub fn path(&self, number: u8) -> Option<&'static Path> {
        self.paths.iter().find(|path| path.number == number)
    }
}

/// Structural identity of a path: its dungeon's name plus its number.
///
/// Two paths are the same path exactly when their ids are equal. Two story
/// paths of different dungeons share every field except the dungeon, so path
/// fields alone are never used for identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PathId {
    pub dungeon: &'static str,
    pub number: u8,
}

impl PathId {
    pub const fn new(dungeon: &'static str, number: u8) -> Self {
        Self { dungeon, number }
    }

    /// Id of `path` inside `dungeon`.
    pub fn of(dungeon: &Dungeon, path: &Path) -> Self {
        Self::new(dungeon.name, path.number)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} path {}", self.dungeon, self.number)
    }
}

/// The full set of dungeons paths are rolled from.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// Dungeons in display order
    pub dungeons: &'static [Dungeon],
    /// Paths that are never selected
    pub forbidden: &'static [PathId],
}

impl Catalog {
    pub const fn new(dungeons: &'static [Dungeon], forbidden: &'static [PathId]) -> Self {
        Self {
            dungeons,
            forbidden,
        }
    }

    /// Whether `path` of `dungeon` is excluded from selection.
    pub fn is_forbidden(&self, dungeon: &Dungeon, path: &Path) -> bool {
        let id = PathId::of(dungeon, path);
        self.forbidden.contains(&id)
    }

    /// Every selectable path of the given difficulty, in catalog order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dungeon_roller::{Difficulty, GUILD_CATALOG};
    ///
    /// let hard = GUILD_CATALOG.eligible(Difficulty::Hard);
    /// assert_eq!(hard.len(), 5);
    /// assert!(hard.iter().all(|s| !s.path.is_story()));
    /// ```
    pub fn eligible(&self, difficulty: Difficulty) -> Vec<Selection> {
        self.eligible_entries(difficulty)
            .map(|(dungeon, path)| Selection::new(dungeon, path))
            .collect()
    }

    /// Number of selectable paths of the given difficulty.
    pub fn eligible_count(&self, difficulty: Difficulty) -> usize {
        self.eligible_entries(difficulty).count()
    }

    fn eligible_entries(
        &self,
        difficulty: Difficulty,
    ) -> impl Iterator<Item = (&'static Dungeon, &'static Path)> + '_ {
        let dungeons: &'static [Dungeon] = self.dungeons;
        dungeons
            .iter()
            .flat_map(|dungeon| dungeon.paths.iter().map(move |path| (dungeon, path)))
            .filter(move |(dungeon, path)| {
                path.difficulty == difficulty && !self.is_forbidden(dungeon, path)
            })
    }

    /// Total number of paths, forbidden ones included.
    pub fn path_count(&self) -> usize {
        self.dungeons.iter().map(|dungeon| dungeon.paths.len()).sum()
    }

    /// Finds a dungeon by name.
    pub fn dungeon(&self, name: &str) -> Option<&'static Dungeon> {
        self.dungeons.iter().find(|dungeon| dungeon.name == name)
    }

    /// Checks the catalog's structural invariants.
    ///
    /// Every dungeon needs exactly one path numbered 0, named "Story", and
    /// unique path numbers. Every forbidden id must name an existing path.
    pub fn validate(&self) -> RollerResult<()> {
        if self.dungeons.is_empty() {
            return Err(RollerError::InvalidCatalog(
                "catalog has no dungeons".to_string(),
            ));
        }

        for dungeon in self.dungeons {
            let stories: Vec<&Path> = dungeon.paths.iter().filter(|p| p.is_story()).collect();
            match stories.as_slice() {
                [story] if story.name == "Story" => {}
                [other] => {
                    return Err(RollerError::InvalidCatalog(format!(
                        "{}: path 0 is named {:?}, expected \"Story\"",
                        dungeon.name, other.name
                    )));
                }
                _ => {
                    return Err(RollerError::InvalidCatalog(format!(
                        "{}: expected exactly one story path, found {}",
                        dungeon.name,
                        stories.len()
                    )));
                }
            }

            for (i, path) in dungeon.paths.iter().enumerate() {
                if dungeon.paths[..i].iter().any(|p| p.number == path.number) {
                    return Err(RollerError::InvalidCatalog(format!(
                        "{}: duplicate path number {}",
                        dungeon.name, path.number
                    )));
                }
            }
        }

        for id in self.forbidden {
            let exists = self
                .dungeon(id.dungeon)
                .and_then(|dungeon| dungeon.path(id.number))
                .is_some();
            if !exists {
                return Err(RollerError::InvalidCatalog(format!(
                    "forbidden path {} does not exist",
                    id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STORY_ONLY: [Path; 2] = [
        Path::new("Story", 0, Difficulty::Easy),
        Path::new("Side", 1, Difficulty::Hard),
    ];
    static TWIN_STORY: [Path; 2] = [
        Path::new("Story", 0, Difficulty::Easy),
        Path::new("Story", 0, Difficulty::Easy),
    ];
    static LOOKALIKE_DUNGEONS: [Dungeon; 2] = [
        Dungeon::new("First", &STORY_ONLY),
        Dungeon::new("Second", &STORY_ONLY),
    ];
    static FIRST_STORY: [PathId; 1] = [PathId::new("First", 0)];

    #[test]
    fn test_difficulty_levels() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(difficulty.level()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(4), None);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_forbidden_is_structural() {
        // Both dungeons share the same path table; only the first story is forbidden
        let catalog = Catalog::new(&LOOKALIKE_DUNGEONS, &FIRST_STORY);
        let first = &LOOKALIKE_DUNGEONS[0];
        let second = &LOOKALIKE_DUNGEONS[1];

        assert!(catalog.is_forbidden(first, &first.paths[0]));
        assert!(!catalog.is_forbidden(second, &second.paths[0]));
        assert!(!catalog.is_forbidden(first, &first.paths[1]));

        assert_eq!(catalog.eligible_count(Difficulty::Easy), 1);
        assert_eq!(catalog.eligible(Difficulty::Easy)[0].dungeon.name, "Second");
    }

    #[test]
    fn test_eligible_matches_count() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                GUILD_CATALOG.eligible(difficulty).len(),
                GUILD_CATALOG.eligible_count(difficulty)
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_story() {
        static DUNGEONS: [Dungeon; 1] = [Dungeon::new("Twins", &TWIN_STORY)];
        let catalog = Catalog::new(&DUNGEONS, &[]);
        assert!(matches!(
            catalog.validate(),
            Err(RollerError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_forbidden() {
        static MISSING: [PathId; 1] = [PathId::new("First", 9)];
        let catalog = Catalog::new(&LOOKALIKE_DUNGEONS, &MISSING);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_dungeon_lookup() {
        let arah = GUILD_CATALOG.dungeon("Ruined City of Arah").unwrap();
        assert_eq!(arah.paths.len(), 5);
        assert_eq!(arah.path(4).map(|p| p.name), Some("Seer"));
        assert!(arah.path(5).is_none());
        assert!(GUILD_CATALOG.dungeon("Fractals of the Mists").is_none());
    }
}
