//! Named default configurations for new quotes.
//!
//! New quotes open their fiscal tab seeded from these constructors instead
//! of literals scattered through call sites. Percentages are editable and
//! toggleable afterwards; the values here only matter until the user first
//! touches them.

use rust_decimal::Decimal;

use crate::models::{ChargeGroup, ChargeIncidence, ChargeItem, SimplesBracket};

fn pct(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

fn item(key: &str, label: &str, percentage: Decimal, enabled: bool) -> ChargeItem {
    ChargeItem {
        key: key.to_string(),
        label: label.to_string(),
        percentage,
        enabled,
    }
}

/// The six-bracket Simples Nacional table used when a quote carries no
/// stored table of its own.
pub fn default_simples_table() -> Vec<SimplesBracket> {
    let bracket = |index: u8, ceiling: i64, rate: Decimal, description: &str| SimplesBracket {
        index,
        revenue_ceiling: Decimal::from(ceiling),
        rate,
        description: description.to_string(),
    };

    vec![
        bracket(1, 180_000, pct(45, 1), "Até R$ 180.000,00"),
        bracket(2, 360_000, pct(78, 1), "De R$ 180.000,01 a R$ 360.000,00"),
        bracket(3, 720_000, pct(100, 1), "De R$ 360.000,01 a R$ 720.000,00"),
        bracket(4, 1_800_000, pct(112, 1), "De R$ 720.000,01 a R$ 1.800.000,00"),
        bracket(5, 3_600_000, pct(147, 1), "De R$ 1.800.000,01 a R$ 3.600.000,00"),
        bracket(6, 4_800_000, pct(300, 1), "De R$ 3.600.000,01 a R$ 4.800.000,00"),
    ]
}

/// Default BDI composition for a new quote.
pub fn default_bdi_groups() -> Vec<ChargeGroup> {
    vec![ChargeGroup {
        key: "bdi".to_string(),
        label: "BDI".to_string(),
        incidence: ChargeIncidence::Direct,
        items: vec![
            item("adm-central", "Administração central", pct(300, 2), true),
            item("adm-local", "Administração local", pct(0, 2), false),
            item("despesas-financeiras", "Despesas financeiras", pct(120, 2), true),
            item("seguro-garantia", "Seguro e garantia", pct(80, 2), true),
            item("lucro", "Lucro", pct(2000, 2), true),
        ],
    }]
}

/// Default payroll social-charge groups (encargos sociais) A through D.
///
/// Groups A and B reflect incidence of the base charges (direct); C and D
/// do not (indirect). The split is fixed here and never recomputed.
pub fn default_labor_charge_groups() -> Vec<ChargeGroup> {
    vec![
        ChargeGroup {
            key: "grupo-a".to_string(),
            label: "Grupo A - Encargos básicos".to_string(),
            incidence: ChargeIncidence::Direct,
            items: vec![
                item("inss", "INSS", pct(2000, 2), true),
                item("fgts", "FGTS", pct(800, 2), true),
                item("salario-educacao", "Salário educação", pct(250, 2), true),
                item("sesi", "SESI", pct(150, 2), true),
                item("senai", "SENAI", pct(100, 2), true),
                item("sebrae", "SEBRAE", pct(60, 2), true),
                item("incra", "INCRA", pct(20, 2), true),
                item("seguro-acidente", "Seguro acidente de trabalho", pct(300, 2), true),
            ],
        },
        ChargeGroup {
            key: "grupo-b".to_string(),
            label: "Grupo B - Verbas que recebem incidência".to_string(),
            incidence: ChargeIncidence::Direct,
            items: vec![
                item("decimo-terceiro", "13º salário", pct(833, 2), true),
                item("ferias", "Férias e abono", pct(1111, 2), true),
                item("aviso-previo", "Aviso prévio trabalhado", pct(194, 2), true),
                item("auxilio-doenca", "Auxílio doença", pct(69, 2), true),
                item("acidente-trabalho", "Licença por acidente", pct(12, 2), true),
            ],
        },
        ChargeGroup {
            key: "grupo-c".to_string(),
            label: "Grupo C - Verbas sem incidência".to_string(),
            incidence: ChargeIncidence::Indirect,
            items: vec![
                item("multa-fgts", "Multa rescisória FGTS", pct(320, 2), true),
                item("indenizacao-adicional", "Indenização adicional", pct(42, 2), true),
            ],
        },
        ChargeGroup {
            key: "grupo-d".to_string(),
            label: "Grupo D - Reincidência de A sobre B".to_string(),
            incidence: ChargeIncidence::Indirect,
            items: vec![item(
                "reincidencia",
                "Reincidência do Grupo A sobre o Grupo B",
                pct(768, 2),
                true,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::simples::validate_table;

    #[test]
    fn default_simples_table_has_six_monotonic_brackets() {
        let table = default_simples_table();

        assert_eq!(table.len(), 6);
        assert_eq!(validate_table(&table), Ok(()));
    }

    #[test]
    fn default_simples_rates_match_reference_values() {
        let rates: Vec<_> = default_simples_table().iter().map(|b| b.rate).collect();

        assert_eq!(
            rates,
            vec![
                dec!(4.5),
                dec!(7.8),
                dec!(10.0),
                dec!(11.2),
                dec!(14.7),
                dec!(30.0)
            ]
        );
    }

    #[test]
    fn default_bdi_group_keeps_disabled_local_administration() {
        let groups = default_bdi_groups();
        let local = groups[0].item("adm-local").unwrap();

        assert!(!local.enabled);
        assert_eq!(local.percentage, dec!(0.00));
    }

    #[test]
    fn default_labor_groups_split_direct_and_indirect() {
        let groups = default_labor_charge_groups();

        let direct: Vec<_> = groups
            .iter()
            .filter(|g| g.incidence == ChargeIncidence::Direct)
            .map(|g| g.key.as_str())
            .collect();

        assert_eq!(direct, vec!["grupo-a", "grupo-b"]);
    }
}
