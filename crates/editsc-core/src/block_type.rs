use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Built-in catalog of block kinds the editor knows how to label.
const DEFAULT_BLOCK_TYPES: &str = r#"[
    (id: 0, name: "Air"),
    (id: 1, name: "Bedrock"),
    (id: 2, name: "Dirt"),
    (id: 3, name: "Granite"),
    (id: 8, name: "Grass"),
    (id: 9, name: "Oak Wood"),
    (id: 10, name: "Birch Wood"),
    (id: 11, name: "Spruce Wood"),
    (id: 12, name: "Oak Leaves"),
    (id: 13, name: "Birch Leaves"),
    (id: 14, name: "Spruce Leaves"),
    (id: 15, name: "Glass"),
    (id: 16, name: "Coal Ore"),
]"#;

/// A single block-type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTypeDef {
    /// Block-type id as stored in bits [0:9] of a block word.
    pub id: u32,
    /// Human-readable name for reports.
    pub name: String,
}

/// Collection of block-type definitions indexed by id.
#[derive(Debug, Clone, Default)]
pub struct BlockTypeTable {
    pub types: Vec<BlockTypeDef>,
}

impl BlockTypeTable {
    /// Parse a RON list of `(id, name)` definitions.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, CoreError> {
        let options = ron::Options::default();
        let types: Vec<BlockTypeDef> = options
            .from_str(ron_str)
            .map_err(|e| CoreError::BlockTypeParse(e.to_string()))?;
        Ok(Self { types })
    }

    /// The built-in catalog.
    pub fn defaults() -> Result<Self, CoreError> {
        Self::from_ron_str(DEFAULT_BLOCK_TYPES)
    }

    pub fn get(&self, id: u32) -> Option<&BlockTypeDef> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Name for `id`, or `"Unknown"` when the catalog has no entry.
    pub fn name_of(&self, id: u32) -> &str {
        self.get(id).map(|t| t.name.as_str()).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_parses() {
        let table = BlockTypeTable::from_ron_str(DEFAULT_BLOCK_TYPES).expect("valid RON");
        assert_eq!(table.types.len(), 13);
        assert_eq!(table.name_of(0), "Air");
        assert_eq!(table.name_of(8), "Grass");
        assert_eq!(table.name_of(16), "Coal Ore");
    }

    #[test]
    fn test_unknown_id() {
        let table = BlockTypeTable::defaults().expect("embedded catalog");
        assert_eq!(table.types.len(), 13);
        assert!(table.get(1023).is_none());
        assert_eq!(table.name_of(1023), "Unknown");
    }

    #[test]
    fn test_invalid_ron_rejected() {
        let result = BlockTypeTable::from_ron_str("[(id: \"x\")]");
        assert!(matches!(result, Err(CoreError::BlockTypeParse(_))));
    }
}
