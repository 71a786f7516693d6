//! Descriptor catalog.
//!
//! The fixed, ordered list of metric names the pipeline knows how to
//! extract, with per-descriptor configuration: whether the metric is
//! per-share (and therefore split-adjusted) and which series its reported
//! average is taken over. The catalog is an immutable value passed into the
//! aggregator, never module-level state.

/// Split ratio series consumed by the per-share adjuster.
pub const STOCK_SPLIT_RATIO: &str = "stock_split_ratio";

/// Dividend flows feeding the compound ROI computation.
pub const DIVIDENDS_PER_SHARE: &str = "dividends_per_share";

/// Terminal/initial value for the compound ROI computation.
pub const NET_EQUITY_PER_SHARE: &str = "net_equity_per_share";

/// Net income, also used by the profitability check.
pub const NET_INCOME: &str = "net_income";

/// Earnings per share.
pub const EPS: &str = "eps";

/// Which series a descriptor's reported average is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageBasis {
    /// Mean of the metric's level history (typical for ratios).
    History,
    /// Mean of the year-over-year change series (typical for flow metrics
    /// where the growth rate is the interesting figure).
    YoyChange,
}

/// A financial metric the pipeline knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Descriptor name (unique identifier, key into the metric map)
    pub name: &'static str,
    /// Whether the metric is expressed per outstanding share and must be
    /// normalized for historical stock splits
    pub per_share: bool,
    /// Which series the reported average is taken over
    pub average: AverageBasis,
    /// Brief description of what the metric measures
    pub description: &'static str,
}

/// Immutable, ordered set of descriptors driving the aggregator.
#[derive(Debug, Clone)]
pub struct DescriptorCatalog {
    descriptors: Vec<Descriptor>,
}

impl DescriptorCatalog {
    /// Build a catalog from an explicit descriptor list.
    ///
    /// Order is preserved; it determines the order of metrics in the
    /// resulting [`crate::stats::CompanyStats`].
    pub const fn from_descriptors(descriptors: Vec<Descriptor>) -> Self {
        Self { descriptors }
    }

    /// The standard screening catalog.
    pub fn standard() -> Self {
        use AverageBasis::{History, YoyChange};

        Self::from_descriptors(vec![
            Descriptor {
                name: NET_INCOME,
                per_share: false,
                average: YoyChange,
                description: "Net income",
            },
            Descriptor {
                name: "total_sales",
                per_share: false,
                average: YoyChange,
                description: "Total sales",
            },
            Descriptor {
                name: "total_cost_of_goods",
                per_share: false,
                average: YoyChange,
                description: "Total cost of goods sold",
            },
            Descriptor {
                name: "gross_profit_margin",
                per_share: false,
                average: YoyChange,
                description: "Gross profit margin",
            },
            Descriptor {
                name: "assets_to_liabilities",
                per_share: false,
                average: History,
                description: "Assets to liabilities",
            },
            Descriptor {
                name: "current_assets_to_current_liabilities",
                per_share: false,
                average: History,
                description: "Current assets to current liabilities",
            },
            Descriptor {
                name: "current_assets_to_liabilities",
                per_share: false,
                average: History,
                description: "Current assets to total liabilities",
            },
            Descriptor {
                name: "working_capital_to_current_liabilities",
                per_share: false,
                average: History,
                description: "Working capital to current liabilities",
            },
            Descriptor {
                name: "working_capital_to_liabilities",
                per_share: false,
                average: History,
                description: "Working capital to total liabilities",
            },
            Descriptor {
                name: "goodwill_to_assets",
                per_share: false,
                average: History,
                description: "Goodwill to assets",
            },
            Descriptor {
                name: "goodwill_to_equity",
                per_share: false,
                average: History,
                description: "Goodwill to equity",
            },
            Descriptor {
                name: "shares_outstanding",
                per_share: false,
                average: History,
                description: "Shares outstanding",
            },
            Descriptor {
                name: EPS,
                per_share: true,
                average: History,
                description: "Earnings per share (split-adjusted)",
            },
            Descriptor {
                name: "equity_per_share",
                per_share: true,
                average: History,
                description: "Equity per share (split-adjusted)",
            },
            Descriptor {
                name: "tangible_assets_per_share",
                per_share: true,
                average: History,
                description: "Tangible assets per share (split-adjusted)",
            },
            Descriptor {
                name: "liabilities_per_share",
                per_share: true,
                average: History,
                description: "Liabilities per share (split-adjusted)",
            },
            Descriptor {
                name: "debt_to_equity",
                per_share: false,
                average: History,
                description: "Debt to equity",
            },
            Descriptor {
                name: "debt_to_net_equity",
                per_share: false,
                average: History,
                description: "Debt to net equity",
            },
            Descriptor {
                name: "return_on_equity",
                per_share: false,
                average: History,
                description: "Return on equity",
            },
            Descriptor {
                name: "return_on_working_capital",
                per_share: false,
                average: History,
                description: "Return on working capital",
            },
        ])
    }

    /// All descriptors, in catalog order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Number of descriptors in the catalog.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for DescriptorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
