use reqwest::Client;

use crate::{
    browser::csinventoryapi,
    floats,
    models::{error::FetchError, web::EnrichedItem},
    parsing::inventory,
};

/// Fetch -> correlate -> float enrich, in that order. A fetch failure aborts
/// the whole run, a float failure only drops the item it belongs to.
pub async fn get_inventory_with_floats(
    client: &Client,
    api_key: &str,
    steamid64: &str,
) -> Result<Vec<EnrichedItem>, FetchError> {
    let raw = csinventoryapi::get_user_inventory(client, api_key, steamid64).await?;

    let parsed = inventory::parse_inventory(&raw);
    println!(
        "Parsed {} of {} assets (inventory reports {} items total).",
        parsed.len(),
        raw.assets.len(),
        raw.total_inventory_count
    );

    Ok(floats::add_floats(client, api_key, parsed, steamid64).await)
}
