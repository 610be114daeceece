//! Typed repository over a blob store

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::{StoreError, ToolStore};
use crate::challenge::ChallengeProgress;
use crate::goals::Goal;
use crate::networth::{AssetEntry, LiabilityEntry};

/// Storage keys, carried over verbatim from the original browser-local state
pub mod keys {
    pub const NET_WORTH_ASSETS: &str = "netWorthAssets";
    pub const NET_WORTH_LIABILITIES: &str = "netWorthLiabilities";
    pub const FINANCIAL_GOALS: &str = "financialGoals";
    pub const CHALLENGE_PROGRESS: &str = "challengeProgress";
    pub const CHALLENGE_START_DATE: &str = "challengeStartDate";
}

/// Typed access to the persisted record sets
///
/// Takes ownership of its backend; inject a [`MemoryStore`](super::MemoryStore)
/// in tests and a [`JsonFileStore`](super::JsonFileStore) in the CLI.
#[derive(Debug, Clone)]
pub struct Repository<S: ToolStore> {
    store: S,
}

impl<S: ToolStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load_list<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_list<T: serde::Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        self.store.put(key, &raw)
    }

    pub fn load_assets(&self) -> Result<Vec<AssetEntry>, StoreError> {
        self.load_list(keys::NET_WORTH_ASSETS)
    }

    pub fn save_assets(&mut self, assets: &[AssetEntry]) -> Result<(), StoreError> {
        self.save_list(keys::NET_WORTH_ASSETS, assets)
    }

    pub fn load_liabilities(&self) -> Result<Vec<LiabilityEntry>, StoreError> {
        self.load_list(keys::NET_WORTH_LIABILITIES)
    }

    pub fn save_liabilities(&mut self, liabilities: &[LiabilityEntry]) -> Result<(), StoreError> {
        self.save_list(keys::NET_WORTH_LIABILITIES, liabilities)
    }

    pub fn load_goals(&self) -> Result<Vec<Goal>, StoreError> {
        self.load_list(keys::FINANCIAL_GOALS)
    }

    pub fn save_goals(&mut self, goals: &[Goal]) -> Result<(), StoreError> {
        self.save_list(keys::FINANCIAL_GOALS, goals)
    }

    /// Load challenge progress from its two keys: a JSON array of completed
    /// day numbers and a bare ISO start date string
    pub fn load_challenge(&self) -> Result<ChallengeProgress, StoreError> {
        let completed_days: BTreeSet<u32> = match self.store.get(keys::CHALLENGE_PROGRESS)? {
            Some(raw) => serde_json::from_str::<Vec<u32>>(&raw)?.into_iter().collect(),
            None => BTreeSet::new(),
        };

        let start_date = match self.store.get(keys::CHALLENGE_START_DATE)? {
            Some(raw) => Some(raw.trim().parse::<NaiveDate>()?),
            None => None,
        };

        Ok(ChallengeProgress {
            completed_days,
            start_date,
        })
    }

    pub fn save_challenge(&mut self, progress: &ChallengeProgress) -> Result<(), StoreError> {
        let days: Vec<u32> = progress.completed_days.iter().copied().collect();
        self.store
            .put(keys::CHALLENGE_PROGRESS, &serde_json::to_string(&days)?)?;

        match progress.start_date {
            Some(date) => self
                .store
                .put(keys::CHALLENGE_START_DATE, &date.format("%Y-%m-%d").to_string())?,
            None => self.store.delete(keys::CHALLENGE_START_DATE)?,
        }
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networth::AssetCategory;
    use crate::store::MemoryStore;

    fn repo() -> Repository<MemoryStore> {
        Repository::new(MemoryStore::new())
    }

    #[test]
    fn test_missing_keys_read_as_defaults() {
        let repo = repo();

        assert!(repo.load_assets().unwrap().is_empty());
        assert!(repo.load_liabilities().unwrap().is_empty());
        assert!(repo.load_goals().unwrap().is_empty());

        let progress = repo.load_challenge().unwrap();
        assert_eq!(progress, ChallengeProgress::default());
    }

    #[test]
    fn test_asset_roundtrip() {
        let mut repo = repo();
        let assets = vec![AssetEntry {
            id: "1".to_string(),
            name: "Brokerage".to_string(),
            category: AssetCategory::Investments,
            value: 42_000.0,
        }];

        repo.save_assets(&assets).unwrap();
        assert_eq!(repo.load_assets().unwrap(), assets);
    }

    #[test]
    fn test_challenge_roundtrip() {
        let mut repo = repo();
        let mut progress = ChallengeProgress::default();
        progress.start(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        progress.toggle_day(1);
        progress.toggle_day(7);

        repo.save_challenge(&progress).unwrap();
        assert_eq!(repo.load_challenge().unwrap(), progress);

        // Resetting clears the start date key too
        progress.reset();
        repo.save_challenge(&progress).unwrap();
        let loaded = repo.load_challenge().unwrap();
        assert_eq!(loaded.start_date, None);
        assert!(loaded.completed_days.is_empty());
    }

    #[test]
    fn test_challenge_reads_original_format() {
        let mut store = MemoryStore::new();
        store.put(keys::CHALLENGE_PROGRESS, "[3,1,2]").unwrap();
        store.put(keys::CHALLENGE_START_DATE, "2026-08-01").unwrap();

        let progress = Repository::new(store).load_challenge().unwrap();
        assert_eq!(
            progress.completed_days.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            progress.start_date,
            NaiveDate::from_ymd_opt(2026, 8, 1)
        );
    }

    #[test]
    fn test_malformed_blob_is_an_error() {
        let mut store = MemoryStore::new();
        store.put(keys::FINANCIAL_GOALS, "not json").unwrap();

        let repo = Repository::new(store);
        assert!(repo.load_goals().is_err());
    }
}
