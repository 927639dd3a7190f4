//! Load illustration policies from a CSV book

use csv::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::IllustrationPolicy;
use crate::error::{PlanningError, Result};

/// Default location of the sample book
pub const DEFAULT_BOOK_PATH: &str = "data/illustration_book.csv";

/// Raw CSV row: `policy_id,current_age,annual_premium,sum_assured,payment_term`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    policy_id: u32,
    current_age: u32,
    annual_premium: f64,
    sum_assured: f64,
    payment_term: u32,
}

impl CsvRow {
    fn into_policy(self) -> Result<IllustrationPolicy> {
        if self.annual_premium < 0.0 || self.sum_assured < 0.0 {
            return Err(PlanningError::InvalidTable {
                table: "policy book",
                message: format!("policy {} has a negative amount", self.policy_id),
            });
        }

        Ok(IllustrationPolicy::new(
            self.current_age,
            self.annual_premium,
            self.sum_assured,
            self.payment_term,
        )
        .with_id(self.policy_id))
    }
}

/// Load all policies from a CSV file
pub fn load_policies<P: AsRef<Path>>(path: P) -> Result<Vec<IllustrationPolicy>> {
    load_policies_from_reader(File::open(path)?)
}

/// Load policies from any reader (e.g., string buffer, request body)
pub fn load_policies_from_reader<R: Read>(reader: R) -> Result<Vec<IllustrationPolicy>> {
    let mut reader = Reader::from_reader(reader);
    let mut policies = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        policies.push(row.into_policy()?);
    }

    Ok(policies)
}

/// Load policies from the default sample book
pub fn load_default_book() -> Result<Vec<IllustrationPolicy>> {
    load_policies(DEFAULT_BOOK_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let csv = "policy_id,current_age,annual_premium,sum_assured,payment_term\n\
                   7,35,24000000,1200000000,20\n";
        let policies = load_policies_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].policy_id, 7);
        assert_eq!(policies[0].current_age, 35);
        assert_eq!(policies[0].payment_term, 20);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let csv = "policy_id,current_age,annual_premium,sum_assured,payment_term\n\
                   1,35,-5,1000,10\n";
        assert!(load_policies_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_default_book() {
        let policies = load_default_book().expect("Failed to load book");
        assert_eq!(policies.len(), 4);
        assert_eq!(policies[0].policy_id, 1);
        assert_eq!(policies[3].current_age, 62);
    }
}
