//! Look up a domain's reputation from the command line.
//!
//! ```bash
//! export DOMAIN_REPUTATION_API_KEY=at_...
//! RUST_LOG=domain_reputation=debug cargo run --example lookup -- whoisxmlapi.com
//! ```

use domain_reputation::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let domain = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "whoisxmlapi.com".to_string());

    // API key comes from DOMAIN_REPUTATION_API_KEY.
    let client = DomainReputationClient::builder()
        .timeout(Duration::from_secs(60))
        .build()?;
    let ctx = RequestContext::background().with_timeout(Duration::from_secs(90));

    // The XML format is ignored here: typed lookups always request JSON.
    match client
        .get(&ctx, &domain, &[QueryOption::output_format(OutputFormat::Xml)])
        .await
    {
        Ok(lookup) => {
            println!("{} {}", lookup.result.mode, lookup.result.reputation_score);
            for test in &lookup.result.test_results {
                println!("{} {}", test.test, test.test_code);
                for warning in &test.warnings {
                    println!("  {} {}", warning.code, warning.description);
                }
            }
        }
        Err(Error::Api(api)) => {
            eprintln!("service error {}: {}", api.code, api.message);
            return Err(api.into());
        }
        Err(e) => return Err(e.into()),
    }

    // Raw lookup running every test, returned in the requested format.
    let raw = client
        .get_raw(
            &ctx,
            &domain,
            &[QueryOption::mode(Mode::Full), QueryOption::output_format(OutputFormat::Xml)],
        )
        .await?;
    println!("{}", raw.text());

    Ok(())
}
