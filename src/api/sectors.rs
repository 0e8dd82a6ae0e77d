use log::{debug, info, warn};
use reqwest::{
    StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;

use super::{
    endpoint::Endpoint,
    error::FetchError,
    transport::{ReqwestTransport, Transport},
};
use crate::{
    config::Config,
    models::{Classification, CompanyFilter, FetchOutcome, ReportSection, SubsectorSection},
};

#[derive(Clone, Debug)]
pub struct SectorsApi<T = ReqwestTransport> {
    config: Config,
    transport: T,
}

impl SectorsApi<ReqwestTransport> {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> SectorsApi<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn auth_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut value = HeaderValue::from_str(self.config.api_key())?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    pub async fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<FetchOutcome, FetchError> {
        let url = endpoint.url(self.config.base_url());
        let headers = self.auth_headers()?;

        debug!("GET {}", url);
        let res = self
            .transport
            .get(&url, headers)
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = *res.status();
        if status != StatusCode::OK {
            warn!("Request to {} failed with status {}: {}", url, status, res.body());
            return Ok(FetchOutcome::Failure {
                status,
                body: res.into_body(),
            });
        }

        let body = res.into_body();
        let data = match serde_json::from_str::<Value>(&body) {
            Ok(data) => data,
            Err(source) => return Err(FetchError::MalformedJson { url, body, source }),
        };
        info!("{}", data);

        Ok(FetchOutcome::Success {
            payload: data.to_string(),
        })
    }

    pub async fn get_daily_transaction_data(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<FetchOutcome, FetchError> {
        self.fetch(&Endpoint::Daily {
            symbol,
            start: start_date,
            end: end_date,
        })
        .await
    }

    pub async fn get_most_traded(
        &self,
        start_date: &str,
        end_date: &str,
        n_stock: u32,
        adjusted: bool,
    ) -> Result<FetchOutcome, FetchError> {
        self.fetch(&Endpoint::MostTraded {
            start: start_date,
            end: end_date,
            n_stock,
            adjusted,
        })
        .await
    }

    pub async fn get_company_report(
        &self,
        symbol: &str,
        sections: &[ReportSection],
    ) -> Result<FetchOutcome, FetchError> {
        self.fetch(&Endpoint::CompanyReport { symbol, sections })
            .await
    }

    pub async fn get_subsector_report(
        &self,
        sub_sector: &str,
        sections: &[SubsectorSection],
    ) -> Result<FetchOutcome, FetchError> {
        self.fetch(&Endpoint::SubsectorReport {
            sub_sector,
            sections,
        })
        .await
    }

    pub async fn get_top_companies(
        &self,
        classification: Classification,
        n_stock: u32,
        year: i32,
    ) -> Result<FetchOutcome, FetchError> {
        self.fetch(&Endpoint::TopCompanies {
            classification,
            n_stock,
            year,
        })
        .await
    }

    pub async fn get_companies(&self, filter: CompanyFilter<'_>) -> Result<FetchOutcome, FetchError> {
        self.fetch(&Endpoint::Companies(filter)).await
    }
}
