// Asset catalog: the fixed, read-only set of clips
// Built once at startup from the compiled-in table

pub mod asset;
pub mod sound_data;

pub use asset::{display_name, AudioAsset};

use std::borrow::Cow;
use std::collections::btree_map::{BTreeMap, Entry};

/// All clips keyed by raw name.
///
/// Iteration follows ordinal (byte-wise) key order, so the listing is the
/// same on every run regardless of table order or locale.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: BTreeMap<Cow<'static, str>, AudioAsset>,
}

impl AssetCatalog {
    /// Build the catalog from the compiled-in table
    pub fn load() -> Self {
        let catalog = Self::from_entries(
            sound_data::SOUND_TABLE
                .iter()
                .map(|&(key, payload)| (Cow::Borrowed(key), Cow::Borrowed(payload))),
        );
        if catalog.is_empty() {
            log::warn!("[Catalog] Clip table is empty, nothing will be playable");
        } else {
            log::info!("[Catalog] Loaded {} clips", catalog.len());
        }
        catalog
    }

    /// Build a catalog from arbitrary (key, payload) pairs.
    /// On duplicate keys the first entry wins.
    pub fn from_entries<K, P, I>(entries: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        P: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, P)>,
    {
        let mut assets = BTreeMap::new();
        for (key, payload) in entries {
            let key = key.into();
            match assets.entry(key.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(AudioAsset::new(key, payload.into()));
                }
                Entry::Occupied(_) => {
                    log::warn!("[Catalog] Duplicate clip key {:?}, keeping the first", key);
                }
            }
        }
        Self { assets }
    }

    /// All assets ascending by raw key
    pub fn list_sorted(&self) -> impl Iterator<Item = &AudioAsset> + '_ {
        self.assets.values()
    }

    pub fn get(&self, key: &str) -> Option<&AudioAsset> {
        self.assets.get(key)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::decoder;

    fn keys(catalog: &AssetCatalog) -> Vec<&str> {
        catalog.list_sorted().map(AudioAsset::key).collect()
    }

    #[test]
    fn test_list_sorted_is_ordinal_regardless_of_insertion() {
        let catalog = AssetCatalog::from_entries([
            ("b.wav", ""),
            ("Rocket_shot-01.wav", ""),
            ("a.wav", ""),
            ("Ouch.wav", ""),
        ]);
        // Uppercase sorts before lowercase in byte order
        assert_eq!(keys(&catalog), ["Ouch.wav", "Rocket_shot-01.wav", "a.wav", "b.wav"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let catalog = AssetCatalog::from_entries([("x.wav", "first"), ("x.wav", "second")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("x.wav").unwrap().payload(), "first");
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = AssetCatalog::from_entries(Vec::<(String, String)>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.list_sorted().count(), 0);
    }

    #[test]
    fn test_builtin_table_decodes_to_wav() {
        let catalog = AssetCatalog::load();
        assert_eq!(keys(&catalog), ["Ouch.wav", "Rocket_shot-01.wav"]);
        for asset in catalog.list_sorted() {
            let buffer = decoder::decode(asset.payload()).unwrap();
            assert_eq!(&buffer.bytes()[..4], b"RIFF");
        }
        assert_eq!(
            catalog.get("Rocket_shot-01.wav").unwrap().display_name(),
            "Rocket Shot 01"
        );
    }
}
