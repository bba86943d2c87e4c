use std::io::Read;

use orcamento_core::calculations::simples::{BracketTableError, validate_table};
use orcamento_core::models::{ChargeGroup, ChargeIncidence, ChargeItem, SimplesBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading reference data from CSV.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid incidence code '{0}' (expected D or I)")]
    InvalidIncidence(String),

    #[error("Negative percentage {value} for item '{item}'")]
    NegativePercentage { item: String, value: Decimal },

    #[error("Invalid bracket table: {0}")]
    InvalidTable(#[from] BracketTableError),
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the Simples Nacional brackets CSV file.
///
/// The CSV format:
/// - `index`: 1-based bracket position
/// - `revenue_ceiling`: accumulated gross revenue ceiling in R$
/// - `rate`: nominal rate in percentage points (e.g., 11.2)
/// - `description`: display label for the bracket
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimplesBracketRecord {
    pub index: u8,
    pub revenue_ceiling: Decimal,
    pub rate: Decimal,
    pub description: String,
}

/// A single record from a charge catalog CSV file (BDI or encargos).
///
/// The CSV format:
/// - `group_key` / `group_label`: identity and label of the group
/// - `incidence`: `D` (direct) or `I` (indirect)
/// - `item_key` / `item_label`: identity and label of the item
/// - `percentage`: percentage points over direct cost
/// - `enabled`: `true`/`false` (also accepts `1`/`0`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChargeCatalogRecord {
    pub group_key: String,
    pub group_label: String,
    pub incidence: String,
    pub item_key: String,
    pub item_label: String,
    pub percentage: Decimal,
    #[serde(deserialize_with = "deserialize_flag")]
    pub enabled: bool,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid enabled flag '{other}'"
        ))),
    }
}

/// Loader for the Simples Nacional bracket table.
pub struct SimplesTableLoader;

impl SimplesTableLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SimplesBracketRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SimplesBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a validated bracket table from parsed records.
    ///
    /// Records are ordered by index, then the table invariants (gapless
    /// 1-based indices, strictly increasing ceilings and rates) are
    /// enforced.
    pub fn build_table(
        records: &[SimplesBracketRecord],
    ) -> Result<Vec<SimplesBracket>, CatalogLoaderError> {
        let mut brackets: Vec<SimplesBracket> = records
            .iter()
            .map(|record| SimplesBracket {
                index: record.index,
                revenue_ceiling: record.revenue_ceiling,
                rate: record.rate,
                description: record.description.clone(),
            })
            .collect();
        brackets.sort_by_key(|b| b.index);

        validate_table(&brackets)?;
        Ok(brackets)
    }
}

/// Loader for charge catalogs (BDI and encargos sociais).
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse catalog records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ChargeCatalogRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ChargeCatalogRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build charge groups from parsed records.
    ///
    /// Groups come out in first-seen order with their items in record
    /// order, preserving the on-screen ordering of the source catalog.
    pub fn build_groups(
        records: &[ChargeCatalogRecord],
    ) -> Result<Vec<ChargeGroup>, CatalogLoaderError> {
        let mut groups: Vec<ChargeGroup> = Vec::new();

        for record in records {
            if record.percentage < Decimal::ZERO {
                return Err(CatalogLoaderError::NegativePercentage {
                    item: record.item_key.clone(),
                    value: record.percentage,
                });
            }
            let incidence = ChargeIncidence::parse(&record.incidence)
                .ok_or_else(|| CatalogLoaderError::InvalidIncidence(record.incidence.clone()))?;

            let item = ChargeItem {
                key: record.item_key.clone(),
                label: record.item_label.clone(),
                percentage: record.percentage,
                enabled: record.enabled,
            };

            match groups.iter_mut().find(|g| g.key == record.group_key) {
                Some(group) => group.items.push(item),
                None => groups.push(ChargeGroup {
                    key: record.group_key.clone(),
                    label: record.group_label.clone(),
                    incidence,
                    items: vec![item],
                }),
            }
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const BRACKETS_CSV: &str = "\
index,revenue_ceiling,rate,description
1,180000,4.5,Até R$ 180.000
2,360000,7.8,Até R$ 360.000
3,720000,10.0,Até R$ 720.000
";

    const CATALOG_CSV: &str = "\
group_key,group_label,incidence,item_key,item_label,percentage,enabled
bdi,BDI,D,lucro,Lucro,20.00,true
bdi,BDI,D,adm-local,Administração local,0.00,0
grupo-c,Grupo C,I,multa-fgts,Multa FGTS,3.20,1
";

    // =========================================================================
    // SimplesTableLoader tests
    // =========================================================================

    #[test]
    fn parses_bracket_records() {
        let records = SimplesTableLoader::parse(BRACKETS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].rate, dec!(7.8));
        assert_eq!(records[1].revenue_ceiling, dec!(360000));
    }

    #[test]
    fn build_table_sorts_by_index() {
        let mut records = SimplesTableLoader::parse(BRACKETS_CSV.as_bytes()).unwrap();
        records.reverse();

        let table = SimplesTableLoader::build_table(&records).unwrap();

        assert_eq!(table[0].index, 1);
        assert_eq!(table[2].index, 3);
    }

    #[test]
    fn build_table_rejects_non_monotonic_rates() {
        let mut records = SimplesTableLoader::parse(BRACKETS_CSV.as_bytes()).unwrap();
        records[2].rate = dec!(6.0);

        let result = SimplesTableLoader::build_table(&records);

        assert!(matches!(
            result,
            Err(CatalogLoaderError::InvalidTable(
                BracketTableError::RateOrder(3)
            ))
        ));
    }

    #[test]
    fn parse_rejects_malformed_csv() {
        let result = SimplesTableLoader::parse("index,rate\nnot-a-number,x\n".as_bytes());

        assert!(matches!(result, Err(CatalogLoaderError::CsvParse(_))));
    }

    // =========================================================================
    // CatalogLoader tests
    // =========================================================================

    #[test]
    fn builds_groups_in_first_seen_order() {
        let records = CatalogLoader::parse(CATALOG_CSV.as_bytes()).unwrap();

        let groups = CatalogLoader::build_groups(&records).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "bdi");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].key, "grupo-c");
        assert_eq!(groups[1].incidence, ChargeIncidence::Indirect);
    }

    #[test]
    fn enabled_flag_accepts_numeric_forms() {
        let records = CatalogLoader::parse(CATALOG_CSV.as_bytes()).unwrap();

        assert!(records[0].enabled);
        assert!(!records[1].enabled);
        assert!(records[2].enabled);
    }

    #[test]
    fn rejects_unknown_incidence_code() {
        let csv = "\
group_key,group_label,incidence,item_key,item_label,percentage,enabled
bdi,BDI,X,lucro,Lucro,20.00,true
";
        let records = CatalogLoader::parse(csv.as_bytes()).unwrap();

        let result = CatalogLoader::build_groups(&records);

        assert!(matches!(
            result,
            Err(CatalogLoaderError::InvalidIncidence(code)) if code == "X"
        ));
    }

    #[test]
    fn rejects_negative_percentage() {
        let csv = "\
group_key,group_label,incidence,item_key,item_label,percentage,enabled
bdi,BDI,D,lucro,Lucro,-1.00,true
";
        let records = CatalogLoader::parse(csv.as_bytes()).unwrap();

        let result = CatalogLoader::build_groups(&records);

        assert!(matches!(
            result,
            Err(CatalogLoaderError::NegativePercentage { item, value })
                if item == "lucro" && value == dec!(-1.00)
        ));
    }
}
