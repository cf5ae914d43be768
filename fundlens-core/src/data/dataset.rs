//! DataSet: the loaded, read-only funding table.

use std::collections::BTreeSet;

use crate::domain::FundingRecord;

/// Immutable table of funding records.
///
/// There is no way to mutate records after construction; aggregation
/// functions take `&DataSet` and never write back.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    records: Vec<FundingRecord>,
}

impl DataSet {
    pub fn from_records(records: Vec<FundingRecord>) -> Self {
        Self { records }
    }

    /// Records in source order.
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FundingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct startup names.
    pub fn startups(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.startup.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorted distinct investor names across every raw investor list.
    pub fn investors(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.investor_names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Deterministic BLAKE3 digest over every record, in source order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.records.len() as u64).to_le_bytes());

        for r in &self.records {
            hash_opt(&mut hasher, r.date.map(|d| d.to_string()).as_deref());
            hash_opt(&mut hasher, r.startup.as_deref());
            hash_opt(&mut hasher, r.investors.as_deref());
            hash_opt(&mut hasher, r.vertical.as_deref());
            hash_opt(&mut hasher, r.city.as_deref());
            hash_opt(&mut hasher, r.round.as_deref());
            match r.amount {
                Some(a) => {
                    hasher.update(&[1]);
                    hasher.update(&a.to_le_bytes());
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }

        hasher.finalize().to_hex().to_string()
    }
}

// Length-prefixed so ("ab", "c") and ("a", "bc") hash differently.
fn hash_opt(hasher: &mut blake3::Hasher, value: Option<&str>) {
    match value {
        Some(s) => {
            hasher.update(&[1]);
            hasher.update(&(s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a FundingRecord;
    type IntoIter = std::slice::Iter<'a, FundingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(startup: Option<&str>, investors: Option<&str>) -> FundingRecord {
        FundingRecord {
            date: None,
            startup: startup.map(Into::into),
            investors: investors.map(Into::into),
            vertical: None,
            city: None,
            round: None,
            amount: Some(1.0),
        }
    }

    #[test]
    fn startups_are_sorted_and_distinct() {
        let ds = DataSet::from_records(vec![
            rec(Some("Zeta"), None),
            rec(Some("Acme"), None),
            rec(None, None),
            rec(Some("Zeta"), None),
        ]);
        assert_eq!(ds.startups(), vec!["Acme", "Zeta"]);
    }

    #[test]
    fn investors_are_split_and_distinct() {
        let ds = DataSet::from_records(vec![
            rec(Some("A"), Some("Sequoia, Accel")),
            rec(Some("B"), Some("Accel")),
            rec(Some("C"), None),
        ]);
        assert_eq!(ds.investors(), vec!["Accel", "Sequoia"]);
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let ds = DataSet::from_records(vec![rec(Some("A"), Some("X"))]);
        assert_eq!(ds.fingerprint(), ds.clone().fingerprint());
        assert_eq!(ds.fingerprint().len(), 64);
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = DataSet::from_records(vec![rec(Some("A"), Some("X"))]);
        let b = DataSet::from_records(vec![rec(Some("A"), Some("Y"))]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_distinguishes_field_boundaries() {
        let a = DataSet::from_records(vec![rec(Some("ab"), Some("c"))]);
        let b = DataSet::from_records(vec![rec(Some("a"), Some("bc"))]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn empty_dataset() {
        let ds = DataSet::default();
        assert!(ds.is_empty());
        assert!(ds.startups().is_empty());
        assert!(ds.investors().is_empty());
    }
}
