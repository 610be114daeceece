//! Net worth aggregation over user-entered assets and liabilities
//!
//! Entries are grouped by closed category enums; a snapshot sums each side,
//! takes the difference, and exposes non-zero per-category breakdowns.

use serde::{Deserialize, Serialize};

/// Asset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    CashSavings,
    Investments,
    Retirement,
    RealEstate,
    Vehicles,
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 6] = [
        AssetCategory::CashSavings,
        AssetCategory::Investments,
        AssetCategory::Retirement,
        AssetCategory::RealEstate,
        AssetCategory::Vehicles,
        AssetCategory::Other,
    ];

    /// Display label matching the original category list
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::CashSavings => "Cash & Savings",
            AssetCategory::Investments => "Investments",
            AssetCategory::Retirement => "Retirement Accounts",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::Vehicles => "Vehicles",
            AssetCategory::Other => "Other Assets",
        }
    }
}

/// Liability categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiabilityCategory {
    Mortgage,
    AutoLoan,
    StudentLoan,
    CreditCard,
    PersonalLoan,
    Other,
}

impl LiabilityCategory {
    pub const ALL: [LiabilityCategory; 6] = [
        LiabilityCategory::Mortgage,
        LiabilityCategory::AutoLoan,
        LiabilityCategory::StudentLoan,
        LiabilityCategory::CreditCard,
        LiabilityCategory::PersonalLoan,
        LiabilityCategory::Other,
    ];

    /// Display label matching the original category list
    pub fn as_str(&self) -> &'static str {
        match self {
            LiabilityCategory::Mortgage => "Mortgage",
            LiabilityCategory::AutoLoan => "Auto Loans",
            LiabilityCategory::StudentLoan => "Student Loans",
            LiabilityCategory::CreditCard => "Credit Cards",
            LiabilityCategory::PersonalLoan => "Personal Loans",
            LiabilityCategory::Other => "Other Debt",
        }
    }
}

/// A single user-entered asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub value: f64,
}

/// A single user-entered liability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiabilityEntry {
    pub id: String,
    pub name: String,
    pub category: LiabilityCategory,
    pub value: f64,
}

/// A labeled per-category total within a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub label: &'static str,
    pub value: f64,
}

/// Point-in-time aggregation of assets and liabilities
///
/// Derived entirely from the latest entry lists; no history is retained.
#[derive(Debug, Clone, Serialize)]
pub struct NetWorthSnapshot {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,

    /// Per-category asset totals, zero-valued categories omitted
    pub assets_by_category: Vec<CategoryTotal>,

    /// Per-category liability totals, zero-valued categories omitted
    pub liabilities_by_category: Vec<CategoryTotal>,
}

impl NetWorthSnapshot {
    pub fn from_entries(assets: &[AssetEntry], liabilities: &[LiabilityEntry]) -> Self {
        let total_assets: f64 = assets.iter().map(|a| a.value).sum();
        let total_liabilities: f64 = liabilities.iter().map(|l| l.value).sum();

        let assets_by_category = AssetCategory::ALL
            .iter()
            .map(|&category| CategoryTotal {
                label: category.as_str(),
                value: assets
                    .iter()
                    .filter(|a| a.category == category)
                    .map(|a| a.value)
                    .sum(),
            })
            .filter(|t| t.value > 0.0)
            .collect();

        let liabilities_by_category = LiabilityCategory::ALL
            .iter()
            .map(|&category| CategoryTotal {
                label: category.as_str(),
                value: liabilities
                    .iter()
                    .filter(|l| l.category == category)
                    .map(|l| l.value)
                    .sum(),
            })
            .filter(|t| t.value > 0.0)
            .collect();

        Self {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
            assets_by_category,
            liabilities_by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, category: AssetCategory, value: f64) -> AssetEntry {
        AssetEntry {
            id: id.to_string(),
            name: format!("asset {}", id),
            category,
            value,
        }
    }

    fn liability(id: &str, category: LiabilityCategory, value: f64) -> LiabilityEntry {
        LiabilityEntry {
            id: id.to_string(),
            name: format!("liability {}", id),
            category,
            value,
        }
    }

    #[test]
    fn test_basic_totals() {
        let assets = vec![asset("1", AssetCategory::CashSavings, 1_000.0)];
        let liabilities = vec![liability("2", LiabilityCategory::CreditCard, 400.0)];

        let snapshot = NetWorthSnapshot::from_entries(&assets, &liabilities);
        assert_eq!(snapshot.total_assets, 1_000.0);
        assert_eq!(snapshot.total_liabilities, 400.0);
        assert_eq!(snapshot.net_worth, 600.0);
    }

    #[test]
    fn test_empty_entries() {
        let snapshot = NetWorthSnapshot::from_entries(&[], &[]);
        assert_eq!(snapshot.net_worth, 0.0);
        assert!(snapshot.assets_by_category.is_empty());
        assert!(snapshot.liabilities_by_category.is_empty());
    }

    #[test]
    fn test_category_breakdown_groups_and_filters() {
        let assets = vec![
            asset("1", AssetCategory::Investments, 5_000.0),
            asset("2", AssetCategory::Investments, 2_500.0),
            asset("3", AssetCategory::Vehicles, 12_000.0),
        ];

        let snapshot = NetWorthSnapshot::from_entries(&assets, &[]);
        assert_eq!(snapshot.assets_by_category.len(), 2);

        let invest = snapshot
            .assets_by_category
            .iter()
            .find(|t| t.label == "Investments")
            .unwrap();
        assert_eq!(invest.value, 7_500.0);
    }

    #[test]
    fn test_negative_net_worth() {
        let assets = vec![asset("1", AssetCategory::CashSavings, 500.0)];
        let liabilities = vec![liability("2", LiabilityCategory::StudentLoan, 20_000.0)];

        let snapshot = NetWorthSnapshot::from_entries(&assets, &liabilities);
        assert_eq!(snapshot.net_worth, -19_500.0);
    }
}
