use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Ranking criteria accepted by `companies/top/`.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Classification {
    DividendYield,
    TotalDividend,
    Revenue,
    Earnings,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::DividendYield => "Dividend Yield",
            Classification::TotalDividend => "Dividend (IDR)",
            Classification::Revenue => "Revenue (IDR)",
            Classification::Earnings => "Earnings (IDR)",
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum ReportSection {
    Overview,
    Valuation,
    Future,
    Peers,
    Financials,
    Dividend,
    Management,
    Ownership,
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum SubsectorSection {
    Statistics,
    MarketCap,
    Stability,
    Valuation,
    Growth,
    Companies,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompanyFilter<'a> {
    SubSector(&'a str),
    SubIndustry(&'a str),
}

pub fn join_sections<T: AsRef<str>>(sections: &[T]) -> String {
    sections
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}

/// Rankings inside the `companies` section of a subsector report.
#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq)]
pub enum SubsectorRanking {
    MarketCap,
    Growth,
    Revenue,
    PriceChange,
}

impl SubsectorRanking {
    pub fn label(&self) -> &'static str {
        match self {
            SubsectorRanking::MarketCap => "Market Cap (IDR)",
            SubsectorRanking::Growth => "Revenue Growth",
            SubsectorRanking::Revenue => "Revenue (IDR)",
            SubsectorRanking::PriceChange => "1 Month Price Change",
        }
    }

    pub fn rows_path(&self) -> &'static [&'static str] {
        match self {
            SubsectorRanking::MarketCap => &["companies", "top_companies", "top_mcap"],
            SubsectorRanking::Growth => &["companies", "top_companies", "top_growth"],
            SubsectorRanking::Revenue => &["companies", "top_companies", "top_revenue"],
            SubsectorRanking::PriceChange => &["companies", "top_change_companies"],
        }
    }

    pub fn value_field(&self) -> &'static str {
        match self {
            SubsectorRanking::MarketCap => "market_cap",
            SubsectorRanking::Growth => "revenue_growth",
            SubsectorRanking::Revenue => "revenue_ttm",
            SubsectorRanking::PriceChange => "1mth",
        }
    }
}
