//! # Guild Catalog
//!
//! The dungeons the guild runs. Difficulties are the guild's own balance
//! ratings and change only when the rotation is re-balanced.

use super::Difficulty::{Easy, Hard, Medium};
use super::{Catalog, Dungeon, Path, PathId};

static ASCALONIAN_CATACOMBS: [Path; 4] = [
    Path::new("Story", 0, Easy),
    Path::new("Hodgins", 1, Easy),
    Path::new("Detha", 2, Medium),
    Path::new("Tzark", 3, Easy),
];

static CAUDECUS_MANOR: [Path; 4] = [
    Path::new("Story", 0, Easy),
    Path::new("Asura", 1, Easy),
    Path::new("Seraph", 2, Medium),
    Path::new("Butler", 3, Medium),
];

static TWILIGHT_ARBOR: [Path; 4] = [
    Path::new("Story", 0, Easy),
    Path::new("Leurent", 1, Easy),
    Path::new("Vevina", 2, Easy),
    Path::new("Aetherpath", 3, Hard),
];

static SORROWS_EMBRACE: [Path; 4] = [
    Path::new("Story", 0, Easy),
    Path::new("Fergg", 1, Easy),
    Path::new("Rasolov", 2, Medium),
    Path::new("Koptev", 3, Easy),
];

static HONOR_OF_THE_WAVES: [Path; 4] = [
    Path::new("Story", 0, Medium),
    Path::new("Butcher", 1, Easy),
    Path::new("Plunderer", 2, Medium),
    Path::new("Zealot", 3, Medium),
];

static CRUCIBLE_OF_ETERNITY: [Path; 4] = [
    Path::new("Story", 0, Easy),
    Path::new("Submarine", 1, Easy),
    Path::new("Teleporter", 2, Medium),
    Path::new("Front Door", 3, Easy),
];

static CITADEL_OF_FLAME: [Path; 4] = [
    Path::new("Story", 0, Easy),
    Path::new("Ferrah", 1, Easy),
    Path::new("Magg", 2, Easy),
    Path::new("Rhiannon", 3, Medium),
];

static RUINED_CITY_OF_ARAH: [Path; 5] = [
    Path::new("Story", 0, Hard),
    Path::new("Jotun", 1, Hard),
    Path::new("Mursaat", 2, Hard),
    Path::new("Forgotten", 3, Hard),
    Path::new("Seer", 4, Hard),
];

// "Crucibal" matches the spelling used in past announcements.
static GUILD_DUNGEONS: [Dungeon; 8] = [
    Dungeon::new("Ascalonian Catacombs", &ASCALONIAN_CATACOMBS),
    Dungeon::new("Caudecus Manor", &CAUDECUS_MANOR),
    Dungeon::new("Twilight Arbor", &TWILIGHT_ARBOR),
    Dungeon::new("Sorrow's Embrace", &SORROWS_EMBRACE),
    Dungeon::new("Honor of the Waves", &HONOR_OF_THE_WAVES),
    Dungeon::new("Crucibal of Eternity", &CRUCIBLE_OF_ETERNITY),
    Dungeon::new("Citadel of Flame", &CITADEL_OF_FLAME),
    Dungeon::new("Ruined City of Arah", &RUINED_CITY_OF_ARAH),
];

static GUILD_FORBIDDEN: [PathId; 1] = [PathId::new("Ruined City of Arah", 0)];

/// The catalog the guild schedule is rolled from.
pub static GUILD_CATALOG: Catalog = Catalog::new(&GUILD_DUNGEONS, &GUILD_FORBIDDEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_catalog_is_valid() {
        GUILD_CATALOG.validate().unwrap();
    }

    #[test]
    fn test_guild_catalog_shape() {
        assert_eq!(GUILD_CATALOG.dungeons.len(), 8);
        assert_eq!(GUILD_CATALOG.path_count(), 33);
        for dungeon in GUILD_CATALOG.dungeons {
            assert!((2..=5).contains(&dungeon.paths.len()), "{}", dungeon.name);
        }
    }

    #[test]
    fn test_guild_eligible_totals() {
        assert_eq!(GUILD_CATALOG.eligible_count(Easy), 18);
        assert_eq!(GUILD_CATALOG.eligible_count(Medium), 9);
        assert_eq!(GUILD_CATALOG.eligible_count(Hard), 5);
    }

    #[test]
    fn test_arah_story_is_forbidden() {
        let arah = GUILD_CATALOG.dungeon("Ruined City of Arah").unwrap();
        let story = arah.path(0).unwrap();
        assert_eq!(story.difficulty, Hard);
        assert!(GUILD_CATALOG.is_forbidden(arah, story));

        // Other story paths stay eligible
        let catacombs = &GUILD_CATALOG.dungeons[0];
        assert!(!GUILD_CATALOG.is_forbidden(catacombs, &catacombs.paths[0]));
    }
}
