use crate::models::{
    Classification, CompanyFilter, ReportSection, SubsectorSection, classification::join_sections,
};

/// Sectors API routes. Path segments and query values are inserted verbatim.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint<'a> {
    Daily {
        symbol: &'a str,
        start: &'a str,
        end: &'a str,
    },
    MostTraded {
        start: &'a str,
        end: &'a str,
        n_stock: u32,
        adjusted: bool,
    },
    CompanyReport {
        symbol: &'a str,
        sections: &'a [ReportSection],
    },
    SubsectorReport {
        sub_sector: &'a str,
        sections: &'a [SubsectorSection],
    },
    TopCompanies {
        classification: Classification,
        n_stock: u32,
        year: i32,
    },
    Companies(CompanyFilter<'a>),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Daily { symbol, start, end } => {
                format!("daily/{}/?start={}&end={}", symbol, start, end)
            }
            Endpoint::MostTraded {
                start,
                end,
                n_stock,
                adjusted,
            } => {
                let mut path = format!("most-traded/?start={}&end={}&n_stock={}", start, end, n_stock);
                if *adjusted {
                    path.push_str("&adjusted=true");
                }
                path
            }
            Endpoint::CompanyReport { symbol, sections } => format!(
                "company/report/{}/?sections={}",
                symbol,
                join_sections(*sections)
            ),
            Endpoint::SubsectorReport {
                sub_sector,
                sections,
            } => format!(
                "subsector/report/{}/?sections={}",
                sub_sector,
                join_sections(*sections)
            ),
            Endpoint::TopCompanies {
                classification,
                n_stock,
                year,
            } => format!(
                "companies/top/?classifications={}&n_stock={}&year={}",
                classification, n_stock, year
            ),
            Endpoint::Companies(CompanyFilter::SubSector(sub_sector)) => {
                format!("companies/?sub_sector={}", sub_sector)
            }
            Endpoint::Companies(CompanyFilter::SubIndustry(sub_industry)) => {
                format!("companies/?sub_industry={}", sub_industry)
            }
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.path())
    }
}
