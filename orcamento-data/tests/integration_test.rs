//! Integration tests running CSV reference data through the composition
//! pipeline end to end.

use orcamento_core::calculations::{
    CompositionInput, CostComposer, MarkupMode, next_bracket, resolve_bracket, sum_groups,
};
use orcamento_core::models::ChargeIncidence;
use orcamento_data::{CatalogLoader, SimplesTableLoader};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const BRACKETS_CSV: &str = include_str!("../test-data/simples_brackets.csv");
const ENCARGOS_CSV: &str = include_str!("../test-data/encargos_catalog.csv");

fn load_table() -> Vec<orcamento_core::models::SimplesBracket> {
    let records = SimplesTableLoader::parse(BRACKETS_CSV.as_bytes()).expect("parse brackets");
    SimplesTableLoader::build_table(&records).expect("validate brackets")
}

fn load_encargos() -> Vec<orcamento_core::models::ChargeGroup> {
    let records = CatalogLoader::parse(ENCARGOS_CSV.as_bytes()).expect("parse catalog");
    CatalogLoader::build_groups(&records).expect("build groups")
}

#[test]
fn loads_the_full_six_bracket_table() {
    let table = load_table();

    assert_eq!(table.len(), 6);
    assert_eq!(resolve_bracket(&table, 4).unwrap().rate, dec!(11.2));
    assert_eq!(next_bracket(&table, 4).unwrap().rate, dec!(14.7));
    assert!(next_bracket(&table, 6).is_none());
}

#[test]
fn loads_encargos_groups_with_their_incidence() {
    let groups = load_encargos();

    assert_eq!(groups.len(), 4);
    assert_eq!(groups[0].key, "grupo-a");
    assert_eq!(groups[0].incidence, ChargeIncidence::Direct);
    assert_eq!(groups[3].incidence, ChargeIncidence::Indirect);

    // Group A: 20 + 8 + 3; B: 8.33 + 11.11; C: 3.20; D disabled.
    assert_eq!(sum_groups(&groups), dec!(53.64));
}

#[test]
fn loaded_reference_data_composes_a_quote() {
    let table = load_table();
    let input = CompositionInput {
        direct_cost: dec!(10000.00),
        bdi_groups: vec![],
        iss_rate: dec!(5.00),
        selected_bracket_index: 2,
        labor_charge_groups: load_encargos(),
        markup_mode: MarkupMode::Additive,
    };

    let result = CostComposer::new(&table).calculate(&input).unwrap();

    assert_eq!(result.simples_rate, dec!(7.8));
    assert_eq!(result.tax_total, dec!(12.8));
    assert_eq!(result.direct_charge_total, dec!(50.44));
    assert_eq!(result.indirect_charge_total, dec!(3.20));
    // 10000 × (1 + (12.8 + 53.64) / 100)
    assert_eq!(result.sale_total, dec!(16644.00));
}
