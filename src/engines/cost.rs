//! Price index and cost roll-up.

use crate::config::{CostConfig, DEFAULT_CURRENCY};
use crate::model::{coerce_json_number, round_to, Coerced, OptimizedBom, SupplierCatalog};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decimal places kept on cost totals.
pub const COST_PRECISION: i32 = 4;

/// Lowest known unit price per part across every supplier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceIndex {
    prices: HashMap<String, f64>,
}

impl PriceIndex {
    /// Flatten a catalog into part -> minimum price.
    ///
    /// Entries that are not finite numbers (or numeric strings) are skipped
    /// with a warning; they never reject the catalog.
    #[must_use]
    pub fn build(catalog: &SupplierCatalog) -> Self {
        let mut prices: HashMap<String, f64> = HashMap::new();

        for supplier in &catalog.suppliers {
            for (part, raw) in &supplier.prices {
                let price = match coerce_json_number(raw) {
                    Coerced::Value(price) => price,
                    Coerced::Missing | Coerced::Invalid => {
                        tracing::warn!(
                            "Skipping unusable price {raw} for {part:?} from supplier {:?}",
                            supplier.name
                        );
                        continue;
                    }
                };
                prices
                    .entry(part.clone())
                    .and_modify(|best| *best = best.min(price))
                    .or_insert(price);
            }
        }

        tracing::debug!("Price index holds {} part(s)", prices.len());
        Self { prices }
    }

    /// Best price for a part, by exact key.
    #[must_use]
    pub fn get(&self, part_number: &str) -> Option<f64> {
        self.prices.get(part_number).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Cost of one priced BOM line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostLineItem {
    pub part_number: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_cost: f64,
}

/// Total procurement cost for one build of the BOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub currency: String,
    /// Sum of all line costs, rounded to four decimals.
    pub total_cost: f64,
    pub line_items: Vec<CostLineItem>,
    /// Part numbers without a price, one per unpriced line, in BOM order.
    pub missing_prices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_volume: Option<f64>,
    /// Projected spend for `build_volume` assemblies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_cost: Option<f64>,
}

impl CostSummary {
    /// Number of lines that could be priced.
    #[must_use]
    pub fn priced_count(&self) -> usize {
        self.line_items.len()
    }
}

/// Resolve the reporting currency: config, then catalog, then USD.
#[must_use]
pub fn resolve_currency(config: &CostConfig, catalog: &SupplierCatalog) -> String {
    non_blank(config.currency.as_deref())
        .or_else(|| non_blank(catalog.currency.as_deref()))
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Price every line of the optimized BOM against the supplier catalog.
#[must_use]
pub fn analyze_costs(
    bom: &OptimizedBom,
    catalog: &SupplierCatalog,
    config: &CostConfig,
) -> CostSummary {
    let index = PriceIndex::build(catalog);
    let currency = resolve_currency(config, catalog);

    let mut total = 0.0;
    let mut line_items = Vec::with_capacity(bom.part_count());
    let mut missing_prices = Vec::new();

    for line in &bom.lines {
        let part = line.part_number.trim();
        match index.get(part) {
            Some(unit_price) => {
                let line_cost = line.quantity * unit_price;
                total += line_cost;
                line_items.push(CostLineItem {
                    part_number: part.to_string(),
                    quantity: line.quantity,
                    unit_price,
                    line_cost,
                });
            }
            None => missing_prices.push(part.to_string()),
        }
    }

    let build_volume = config.default_volume;
    let volume_cost = build_volume.map(|volume| round_to(total * volume, COST_PRECISION));

    tracing::debug!(
        "Priced {} of {} part(s); {} missing",
        line_items.len(),
        bom.part_count(),
        missing_prices.len()
    );

    CostSummary {
        currency,
        total_cost: round_to(total, COST_PRECISION),
        line_items,
        missing_prices,
        build_volume,
        volume_cost,
    }
}
