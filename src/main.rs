use anyhow::Result;
use log::error;
use sectors_client::{api::SectorsApi, config::Config, models::FetchOutcome};

const SYMBOL: &str = "BBRI";
const START_DATE: &str = "2024-06-01";
const END_DATE: &str = "2024-06-06";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let api = SectorsApi::new(config)?;

    match api
        .get_daily_transaction_data(SYMBOL, START_DATE, END_DATE)
        .await?
    {
        FetchOutcome::Success { payload } => println!("{}", payload),
        FetchOutcome::Failure { status, .. } => {
            error!("Daily data for {} failed with status {}", SYMBOL, status)
        }
    }

    Ok(())
}
