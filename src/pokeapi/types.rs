//! Upstream response types.
//!
//! Only the fields the handlers read are modelled. Unknown fields are
//! ignored; a missing required field fails deserialization and is treated
//! as an unavailable lookup.

use serde::Deserialize;

/// `GET /pokemon/{name}` response subset.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Pokemon {
    pub name: String,
    pub stats: Vec<StatSlot>,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
}

/// A named upstream resource reference (`{"name": ..., "url": ...}`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

impl Pokemon {
    /// `(stat name, base value)` pairs in upstream order.
    ///
    /// A repeated stat name keeps its first position and takes the later value.
    pub fn stats(&self) -> Vec<(&str, i64)> {
        let mut out: Vec<(&str, i64)> = Vec::with_capacity(self.stats.len());
        for slot in &self.stats {
            match out.iter_mut().find(|(name, _)| *name == slot.stat.name) {
                Some(existing) => existing.1 = slot.base_stat,
                None => out.push((slot.stat.name.as_str(), slot.base_stat)),
            }
        }
        out
    }

    /// Type names in upstream order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Ability names in upstream order.
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}
