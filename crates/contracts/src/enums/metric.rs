use serde::{Deserialize, Serialize};

/// Показатель, выбираемый на дашборде
///
/// Коды совпадают с названиями колонок таблицы продаж
/// (`Sales_USD`, `Quantity`, `Gross_Profit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    #[serde(rename = "Sales_USD")]
    Sales,
    #[serde(rename = "Quantity")]
    Quantity,
    #[serde(rename = "Gross_Profit")]
    GrossProfit,
}

impl Metric {
    /// Получить код показателя
    pub fn code(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales_USD",
            Metric::Quantity => "Quantity",
            Metric::GrossProfit => "Gross_Profit",
        }
    }

    /// Получить человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Quantity => "Quantity",
            Metric::GrossProfit => "Gross Profit",
        }
    }

    /// Все показатели в порядке отображения
    pub fn all() -> Vec<Metric> {
        vec![Metric::Sales, Metric::Quantity, Metric::GrossProfit]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Sales_USD" => Some(Metric::Sales),
            "Quantity" => Some(Metric::Quantity),
            "Gross_Profit" => Some(Metric::GrossProfit),
            _ => None,
        }
    }

    /// Picks the column this metric stands for out of the three summable values.
    pub fn pick(&self, sales_usd: f64, quantity: f64, gross_profit: f64) -> f64 {
        match self {
            Metric::Sales => sales_usd,
            Metric::Quantity => quantity,
            Metric::GrossProfit => gross_profit,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for metric in Metric::all() {
            assert_eq!(Metric::from_code(metric.code()), Some(metric));
        }
        assert_eq!(Metric::from_code("Price_USD"), None);
    }

    #[test]
    fn test_serde_uses_column_codes() {
        let json = serde_json::to_string(&Metric::GrossProfit).unwrap();
        assert_eq!(json, "\"Gross_Profit\"");
        let parsed: Metric = serde_json::from_str("\"Quantity\"").unwrap();
        assert_eq!(parsed, Metric::Quantity);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Metric::Sales.label(), "Sales");
        assert_eq!(Metric::GrossProfit.label(), "Gross Profit");
        assert_eq!(Metric::default(), Metric::Sales);
    }

    #[test]
    fn test_pick_selects_column() {
        assert_eq!(Metric::Sales.pick(10.0, 2.0, 4.0), 10.0);
        assert_eq!(Metric::Quantity.pick(10.0, 2.0, 4.0), 2.0);
        assert_eq!(Metric::GrossProfit.pick(10.0, 2.0, 4.0), 4.0);
    }
}
