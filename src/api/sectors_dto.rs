use anyhow::Result;
use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::utils::{parse_payload, parse_response_array};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct DailyTransactionDto {
    symbol: String,
    date: NaiveDate,
    close: Decimal,
    volume: i64,
    market_cap: Decimal,
}

pub fn decode_daily(payload: &str) -> Result<Vec<DailyTransactionDto>> {
    parse_response_array::<DailyTransactionDto>(
        parse_payload(payload)?,
        "No daily transaction rows could be decoded",
    )
}
