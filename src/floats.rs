use std::time::Duration;

use reqwest::Client;
use tokio::time::{Instant, sleep};

use crate::{
    browser::csinventoryapi,
    models::{
        error::EnrichmentSkipped,
        web::{EnrichedItem, ParsedItem},
    },
    parsing::iteminfo,
};

/// The float API rate limits hard, one call every 10 seconds keeps it happy.
pub const INSPECT_PAUSE: Duration = Duration::from_secs(10);

/// Minimum-interval gate between consecutive float calls. The first pass is
/// free, every later pass waits out whatever is left of the interval since
/// the previous call.
pub struct Pacer {
    interval: Duration,
    last_call: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Pacer { interval, last_call: None }
    }

    pub async fn wait(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}

/// Adds float data to every item that has an inspect link, one call at a time.
///
/// Items without a link and items whose float call fails are logged and left
/// out of the result, a bad item never aborts the rest of the batch. Output is
/// therefore never longer than the input.
pub async fn add_floats(
    client: &Client,
    api_key: &str,
    items: Vec<ParsedItem>,
    steamid64: &str,
) -> Vec<EnrichedItem> {
    let mut enriched: Vec<EnrichedItem> = Vec::with_capacity(items.len());
    let mut pacer = Pacer::new(INSPECT_PAUSE);

    for item in items {
        match enrich(client, api_key, &mut pacer, &item, steamid64).await {
            Ok(done) => enriched.push(done),
            Err(skip) => {
                println!("WARNING: No float for {} (assetid {}): {}", item.name, item.assetid, skip);
            }
        }
    }

    enriched
}

async fn enrich(
    client: &Client,
    api_key: &str,
    pacer: &mut Pacer,
    item: &ParsedItem,
    steamid64: &str,
) -> Result<EnrichedItem, EnrichmentSkipped> {
    let template = item.inspect_link.as_deref().ok_or(EnrichmentSkipped::NoInspectLink)?;
    let inspect_url = resolve_inspect_url(template, steamid64, &item.assetid);

    pacer.wait().await;

    let iteminfo = csinventoryapi::get_iteminfo(client, api_key, &inspect_url)
        .await
        .map_err(EnrichmentSkipped::RequestFailed)?;

    let floats = iteminfo::parse_iteminfo_min(&iteminfo).map_err(EnrichmentSkipped::BadItemInfo)?;

    Ok(EnrichedItem {
        item: item.clone(),
        inspect_url,
        float_value: floats.float_value,
        paint_seed: floats.paint_seed,
        paint_index: floats.paint_index,
    })
}

pub fn resolve_inspect_url(template: &str, steamid64: &str, assetid: &str) -> String {
    template
        .replace("%owner_steamid%", steamid64)
        .replace("%assetid%", assetid)
}
