use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const SHORTLIST_CAP: usize = 10;
pub const SUBSECTOR_SHORTLIST_CAP: usize = 5;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct RankedCompany {
    company_name: String,
    symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Decimal>,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct PeerCompany {
    company_name: String,
    symbol: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
pub struct Shortlist<T> {
    data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    more: String,
}

impl<T> Shortlist<T> {
    /// Keeps `top_n` rows. When more were asked for than exist, or than `cap`
    /// allows, keeps at most `cap` rows and links to `more_link`.
    pub fn capped(
        items: Vec<T>,
        top_n: usize,
        cap: usize,
        key: Option<&str>,
        more_link: &str,
    ) -> Self {
        let (limit, more) = if top_n > items.len() || top_n > cap {
            (cap, more_link.to_string())
        } else {
            (top_n, String::new())
        };

        Self {
            data: items.into_iter().take(limit).collect(),
            key: key.map(str::to_string),
            more,
        }
    }

    pub fn empty(key: Option<&str>) -> Self {
        Self {
            data: Vec::new(),
            key: key.map(str::to_string),
            more: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
