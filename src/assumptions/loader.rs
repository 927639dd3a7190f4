//! CSV-based assumption loader
//!
//! Loads illustration tables from CSV files in data/assumptions/

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Bonus, BonusBasis, BonusSchedule, CoiBand, CoiRateTable, InitialChargeSchedule};
use crate::error::{PlanningError, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const INITIAL_CHARGES_FILE: &str = "initial_charges.csv";
pub const BONUSES_FILE: &str = "bonuses.csv";
pub const COI_RATES_FILE: &str = "coi_rates.csv";

fn parse_field<T: std::str::FromStr>(table: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| PlanningError::ParseNumber {
        table,
        value: raw.to_string(),
    })
}

fn field<'a>(table: &'static str, record: &'a csv::StringRecord, idx: usize) -> Result<&'a str> {
    record.get(idx).ok_or_else(|| PlanningError::InvalidTable {
        table,
        message: format!("missing column {} in row {:?}", idx + 1, record),
    })
}

/// Load initial charges: `year,rate`, one row per policy year
pub fn read_initial_charges<R: Read>(reader: R) -> Result<InitialChargeSchedule> {
    const TABLE: &str = "initial charges";
    let mut reader = csv::Reader::from_reader(reader);
    let mut rates = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let year: u32 = parse_field(TABLE, field(TABLE, &record, 0)?)?;
        let rate: f64 = parse_field(TABLE, field(TABLE, &record, 1)?)?;

        if year == 0 {
            return Err(PlanningError::InvalidTable {
                table: TABLE,
                message: "policy years start at 1".to_string(),
            });
        }
        if rates.insert(year, rate).is_some() {
            return Err(PlanningError::InvalidTable {
                table: TABLE,
                message: format!("year {} listed twice", year),
            });
        }
    }

    Ok(InitialChargeSchedule::new(rates))
}

/// Load bonuses: `year,rate,type` where type is `premium` or `account_value`
pub fn read_bonuses<R: Read>(reader: R) -> Result<BonusSchedule> {
    const TABLE: &str = "bonuses";
    let mut reader = csv::Reader::from_reader(reader);
    let mut bonuses = Vec::new();

    for result in reader.records() {
        let record = result?;
        let year: u32 = parse_field(TABLE, field(TABLE, &record, 0)?)?;
        let rate: f64 = parse_field(TABLE, field(TABLE, &record, 1)?)?;
        let basis: BonusBasis = field(TABLE, &record, 2)?.parse()?;
        bonuses.push(Bonus { year, rate, basis });
    }

    Ok(BonusSchedule::new(bonuses))
}

/// Load cost-of-insurance bands: `min_age,rate_per_mille`
pub fn read_coi_rates<R: Read>(reader: R) -> Result<CoiRateTable> {
    const TABLE: &str = "cost of insurance";
    let mut reader = csv::Reader::from_reader(reader);
    let mut bands = Vec::new();

    for result in reader.records() {
        let record = result?;
        let min_age: u32 = parse_field(TABLE, field(TABLE, &record, 0)?)?;
        let rate_per_mille: f64 = parse_field(TABLE, field(TABLE, &record, 1)?)?;
        bands.push(CoiBand { min_age, rate_per_mille });
    }

    if bands.is_empty() {
        return Err(PlanningError::InvalidTable {
            table: TABLE,
            message: "no age bands".to_string(),
        });
    }

    Ok(CoiRateTable::new(bands))
}

/// Illustration tables loaded from one directory
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    pub initial_charges: InitialChargeSchedule,
    pub bonuses: BonusSchedule,
    pub coi_rates: CoiRateTable,
}

impl LoadedAssumptions {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("loading illustration assumptions from {}", path.display());
        Ok(Self {
            initial_charges: read_initial_charges(File::open(path.join(INITIAL_CHARGES_FILE))?)?,
            bonuses: read_bonuses(File::open(path.join(BONUSES_FILE))?)?,
            coi_rates: read_coi_rates(File::open(path.join(COI_RATES_FILE))?)?,
        })
    }
}
