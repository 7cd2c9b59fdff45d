mod browser;
mod floats;
mod models;
mod parsing;
mod pipeline;

use std::{env, error::Error};

use reqwest::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let api_key: String = env::var("CSINVENTORYAPI_API_KEY")
        .map_err(|_| "No API key provided. Set the CSINVENTORYAPI_API_KEY environment variable.")?;

    let steamid64: String = env::args()
        .nth(1)
        .ok_or("No steamid64 provided. Usage: cs2floats <steamid64>")?;

    let client = Client::new();

    let items = pipeline::get_inventory_with_floats(&client, &api_key, &steamid64).await?;

    println!("{:#?}", items);
    println!("Items with floats: {}", items.len());

    Ok(())
}
