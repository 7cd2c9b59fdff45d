use reqwest::Client;
use serde_json::Value;

use crate::models::{
    error::FetchError,
    web::{Inventory, InventoryResponse},
};

const INVENTORY_URL: &str = "https://csinventoryapi.com/api/v1/inventory";
const FLOAT_URL: &str = "https://csinventoryapi.com/api/v1/float";

/// Fetches the full inventory of a user and validates the response shape.
/// No retries, any transport or validation failure goes straight to the caller.
pub async fn get_user_inventory(
    client: &Client,
    api_key: &str,
    steamid64: &str,
) -> Result<Inventory, FetchError> {
    if steamid64.is_empty() {
        return Err(FetchError::EmptySteamId);
    }

    let response: InventoryResponse = client
        .get(format!("{}?api_key={}&steamid64={}", INVENTORY_URL, api_key, steamid64))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    validate(response)
}

fn validate(response: InventoryResponse) -> Result<Inventory, FetchError> {
    if response.success != 1 {
        return Err(FetchError::UpstreamRejected);
    }
    if response.total_inventory_count == 0 {
        return Err(FetchError::EmptyInventory);
    }

    let assets = response.assets.ok_or(FetchError::MalformedResponse("assets"))?;
    let descriptions = response.descriptions.ok_or(FetchError::MalformedResponse("descriptions"))?;

    Ok(Inventory {
        assets,
        descriptions,
        total_inventory_count: response.total_inventory_count,
    })
}

/// Fetches the iteminfo JSON for one resolved inspect link from the float endpoint.
pub async fn get_iteminfo(
    client: &Client,
    api_key: &str,
    inspect_url: &str,
) -> Result<Value, String> {
    let response = client
        .get(format!("{}?api_key={}&url={}", FLOAT_URL, api_key, urlencoding::encode(inspect_url)))
        .send()
        .await.map_err(|e| format!("Error sending GET request to the csinventoryapi float API. {}", e))?;

    if !response.status().is_success() {
        return Err(format!("GET Request failed! {}", response.status()));
    }

    let value: Value = response
        .json()
        .await.map_err(|e| format!("Parsing the float API response for inspect link {:?} to a JSON failed. {}", inspect_url, e))?;

    let iteminfo = value
        .get("iteminfo")
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or_else(|| String::from("Couldn't get iteminfo from the csinventoryapi float API"))?;

    Ok(iteminfo)
}
