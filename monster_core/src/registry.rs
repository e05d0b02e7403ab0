use crate::config::ContentFileConfig;
use crate::monster::Monster;
use crate::{ConfigError, ContentError};
use item_core::Item;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry of all item and monster templates, loaded from TOML files
#[derive(Debug, Default)]
pub struct ContentRegistry {
    items: HashMap<String, Item>,
    monsters: HashMap<String, Monster>,
}

impl ContentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all content from a directory (recursively)
    ///
    /// Items from every file are registered before any monster is built,
    /// so monsters may reference items declared in other files.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut paths = content_paths(dir)?;
        paths.sort();
        let files = paths
            .into_iter()
            .map(|path| read_content(&path).map(|config| (path, config)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut registry = Self::new();

        for (path, config) in &files {
            for def in &config.items {
                let item = def
                    .build()
                    .map_err(ContentError::from)
                    .map_err(|e| invalid(e, path))?;
                registry
                    .insert_item(def.id.clone(), item)
                    .map_err(|e| invalid(e, path))?;
            }
        }

        for (path, config) in &files {
            for monster_config in &config.monsters {
                let monster = monster_config
                    .build(&registry.items)
                    .map_err(|e| invalid(e, path))?;
                registry
                    .insert_monster(monster_config.id.clone(), monster)
                    .map_err(|e| invalid(e, path))?;
            }
        }

        tracing::info!(
            dir = %dir.display(),
            files = files.len(),
            items = registry.items.len(),
            monsters = registry.monsters.len(),
            "loaded content"
        );
        Ok(registry)
    }

    /// Register an item template
    pub fn insert_item(&mut self, id: String, item: Item) -> Result<(), ContentError> {
        if self.items.contains_key(&id) {
            return Err(ContentError::DuplicateId(id));
        }
        self.items.insert(id, item);
        Ok(())
    }

    /// Register a monster template
    pub fn insert_monster(&mut self, id: String, monster: Monster) -> Result<(), ContentError> {
        if self.monsters.contains_key(&id) {
            return Err(ContentError::DuplicateId(id));
        }
        self.monsters.insert(id, monster);
        Ok(())
    }

    /// Get an item template by ID
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Get a monster template by ID
    pub fn monster(&self, id: &str) -> Option<&Monster> {
        self.monsters.get(id)
    }

    /// List all monster IDs
    pub fn monster_ids(&self) -> impl Iterator<Item = &str> {
        self.monsters.keys().map(|s| s.as_str())
    }

    /// Spawn a fresh battle instance of a monster
    pub fn spawn(&self, id: &str) -> Result<Monster, ContentError> {
        self.monster(id)
            .map(Monster::spawn)
            .ok_or_else(|| ContentError::UnknownMonster(id.to_string()))
    }
}

fn invalid(error: ContentError, path: &Path) -> ConfigError {
    ConfigError::Invalid {
        message: error.to_string(),
        path: path.to_path_buf(),
    }
}

/// Every `.toml` file below `dir`, in no particular order
fn content_paths(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        if !current.exists() {
            continue;
        }

        let read_err = |error| ConfigError::Read {
            error,
            path: current.clone(),
        };
        for entry in std::fs::read_dir(&current).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                found.push(path);
            }
        }
    }

    Ok(found)
}

fn read_content(path: &Path) -> Result<ContentFileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Read {
        error,
        path: path.to_path_buf(),
    })?;
    toml::from_str(&text).map_err(|error| ConfigError::Syntax {
        error,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tempfile::TempDir;

    fn write_content(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(format!("{}.toml", name)), content).unwrap();
    }

    const ITEMS: &str = r#"
[[items]]
id = "bone"
name = "Bone"

[[items]]
id = "rusty_sword"
name = "Rusty Sword"
kind = "gear"
slot = "weapon"

[items.stat_change]
attack = 2
"#;

    const GOBLIN: &str = r#"
[[monsters]]
id = "goblin"
name = "Goblin"
message = "Hee hee!"
gold = 10

[monsters.stats]
max_hp = 8

[[monsters.inventory]]
item = "bone"
count = 2

[[monsters.treasures]]
item = "bone"
weight = 1

[[monsters.treasures]]
item = "rusty_sword"
weight = 3
"#;

    #[test]
    fn test_load_across_files() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "items", ITEMS);
        std::fs::create_dir(dir.path().join("monsters")).unwrap();
        write_content(&dir.path().join("monsters"), "goblin", GOBLIN);

        let registry = ContentRegistry::load(dir.path()).unwrap();

        assert!(registry.item("bone").is_some());
        let goblin = registry.monster("goblin").unwrap();
        assert_eq!(goblin.message(), "Hee hee!");
        assert_eq!(goblin.total_treasures(), 4);
        assert_eq!(registry.monster_ids().collect::<Vec<_>>(), vec!["goblin"]);
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = ContentRegistry::load(&dir.path().join("nope")).unwrap();
        assert!(registry.monster("goblin").is_none());
    }

    #[test]
    fn test_spawn_is_independent_of_template() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "items", ITEMS);
        write_content(dir.path(), "goblin", GOBLIN);

        let registry = ContentRegistry::load(dir.path()).unwrap();
        let mut goblin = registry.spawn("goblin").unwrap();
        goblin.entity.remove_item("Bone", 2).unwrap();

        let template = registry.monster("goblin").unwrap();
        assert_eq!(template.entity.item_count("Bone"), 2);
    }

    #[test]
    fn test_spawn_unknown() {
        let registry = ContentRegistry::new();
        assert!(matches!(
            registry.spawn("dragon"),
            Err(ContentError::UnknownMonster(id)) if id == "dragon"
        ));
    }

    #[test]
    fn test_victory_flow() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "items", ITEMS);
        write_content(dir.path(), "goblin", GOBLIN);
        let registry = ContentRegistry::load(dir.path()).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut hero = crate::Entity::new("Hero");
        let mut gold = 0;
        let mut treasures = 0;
        for _ in 0..20 {
            let goblin = registry.spawn("goblin").unwrap();
            let rewards = goblin.sample_rewards(&mut rng);
            gold += rewards.gold;
            treasures += 1;
            hero.collect_rewards(rewards);
        }

        assert_eq!(hero.gold, gold);
        assert_eq!(hero.item_count("Bone") + hero.item_count("Rusty Sword"), treasures);
    }

    #[test]
    fn test_gear_missing_capability_fails_load() {
        let dir = TempDir::new().unwrap();
        write_content(
            dir.path(),
            "broken",
            r#"
[[items]]
id = "cape"
name = "Cape"
kind = "gear"

[items.stat_change]
agility = 1
"#,
        );

        let result = ContentRegistry::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_unknown_item_fails_load() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "goblin", GOBLIN);

        match ContentRegistry::load(dir.path()) {
            Err(ConfigError::Invalid { message, .. }) => {
                assert!(message.contains("bone"), "message was {}", message)
            }
            other => panic!("Expected invalid content error, got {:?}", other),
        }
    }

    #[test]
    fn test_outfit_stat_overflow_fails_load() {
        let dir = TempDir::new().unwrap();
        write_content(
            dir.path(),
            "ogre",
            r#"
[[items]]
id = "ring"
name = "Ring"
kind = "gear"
slot = "helmet"

[items.stat_change]
attack = 1

[[monsters]]
id = "ogre"
name = "Ogre"
outfit = ["ring"]

[monsters.stats]
attack = 2147483647
"#,
        );

        match ContentRegistry::load(dir.path()) {
            Err(ConfigError::Invalid { message, path }) => {
                assert!(message.contains("Attack"), "message was {}", message);
                assert!(path.ends_with("ogre.toml"));
            }
            other => panic!("Expected invalid content error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_item_fails_load() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "a", ITEMS);
        write_content(dir.path(), "b", ITEMS);

        assert!(matches!(
            ContentRegistry::load(dir.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        write_content(dir.path(), "bad", "[[monsters]\nid = ");

        assert!(matches!(
            ContentRegistry::load(dir.path()),
            Err(ConfigError::Syntax { .. })
        ));
    }
}
