use anyhow::Result;
use serde_json::Value;

use super::utils::{parse_decimal, parse_payload};
use crate::models::{
    Classification, CompanyFilter, PeerCompany, RankedCompany, Shortlist, SubsectorRanking,
    shortlist::{SHORTLIST_CAP, SUBSECTOR_SHORTLIST_CAP},
};

pub const TOP_COMPANIES_MORE: &str = "/";
pub const MOST_TRADED_MORE: &str = "/indonesia/most-traded";

fn rows_at<'a>(data: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    path.iter()
        .try_fold(data, |node, key| node.get(*key))?
        .as_array()
}

// Rows without a name or symbol are dropped; a missing value is kept as `None`.
fn ranked_rows(rows: &[Value], name_field: &str, value_field: &str) -> Vec<RankedCompany> {
    rows.iter()
        .filter_map(|row| {
            Some(RankedCompany::new(
                row.get(name_field)?.as_str()?.to_string(),
                row.get("symbol")?.as_str()?.to_string(),
                row.get(value_field).and_then(parse_decimal),
            ))
        })
        .collect()
}

fn subsector_link(sub_sector: &str) -> String {
    format!("/indonesia/{}", sub_sector)
}

/// Rows of a `companies/top/` payload sit under the classification's own key
/// and carry their value in a field of the same name.
pub fn top_companies_shortlist(
    payload: &str,
    classification: Classification,
    top_n: usize,
) -> Result<Shortlist<RankedCompany>> {
    let data = parse_payload(payload)?;
    let field: &str = classification.as_ref();
    let label = Some(classification.label());

    let Some(rows) = rows_at(&data, &[field]) else {
        return Ok(Shortlist::empty(label));
    };

    Ok(Shortlist::capped(
        ranked_rows(rows, "company_name", field),
        top_n,
        SHORTLIST_CAP,
        label,
        TOP_COMPANIES_MORE,
    ))
}

pub fn most_traded_shortlist(
    payload: &str,
    date: &str,
    top_n: usize,
) -> Result<Shortlist<RankedCompany>> {
    let data = parse_payload(payload)?;
    let rows = rows_at(&data, &[date])
        .map(|rows| ranked_rows(rows, "company_name", "volume"))
        .unwrap_or_default();

    if rows.is_empty() {
        return Ok(Shortlist::empty(Some("Volume")));
    }

    Ok(Shortlist::capped(
        rows,
        top_n,
        SHORTLIST_CAP,
        Some("Volume"),
        MOST_TRADED_MORE,
    ))
}

pub fn subsector_top_shortlist(
    payload: &str,
    sub_sector: &str,
    ranking: SubsectorRanking,
    top_n: usize,
) -> Result<Shortlist<RankedCompany>> {
    let data = parse_payload(payload)?;
    let label = Some(ranking.label());

    let Some(rows) = rows_at(&data, ranking.rows_path()) else {
        return Ok(Shortlist::empty(label));
    };

    Ok(Shortlist::capped(
        ranked_rows(rows, "name", ranking.value_field()),
        top_n,
        SUBSECTOR_SHORTLIST_CAP,
        label,
        &subsector_link(sub_sector),
    ))
}

pub fn peers_shortlist(payload: &str, ticker: &str, top_n: usize) -> Result<Shortlist<PeerCompany>> {
    let data = parse_payload(payload)?;

    let Some(groups) = rows_at(&data, &["peers"]) else {
        return Ok(Shortlist::empty(None));
    };

    let peers: Vec<PeerCompany> = groups
        .iter()
        .filter_map(|group| rows_at(group, &["peers_info", "companies"]))
        .flatten()
        .filter_map(|c| {
            Some(PeerCompany::new(
                c.get("company_name")?.as_str()?.to_string(),
                c.get("symbol")?.as_str()?.to_string(),
            ))
        })
        .collect();

    Ok(Shortlist::capped(
        peers,
        top_n,
        SHORTLIST_CAP,
        None,
        &format!("/idx/{}#peers", ticker),
    ))
}

/// Company rows from `companies/` are passed on as they are. Only sub-sector
/// listings link out.
pub fn companies_shortlist(
    payload: &str,
    filter: CompanyFilter<'_>,
    top_n: usize,
) -> Result<Shortlist<Value>> {
    let data = parse_payload(payload)?;

    let Value::Array(rows) = data else {
        return Ok(Shortlist::empty(None));
    };

    let more_link = match filter {
        CompanyFilter::SubSector(sub_sector) => subsector_link(sub_sector),
        CompanyFilter::SubIndustry(_) => String::new(),
    };

    Ok(Shortlist::capped(rows, top_n, SHORTLIST_CAP, None, &more_link))
}
