use std::collections::HashMap;

use crate::models::web::{Inventory, ParsedItem, RawDescription};

/// Joins every asset with its description over classid and flattens the pair
/// into one ParsedItem per asset, in asset order.
///
/// The join is on classid alone, and when several descriptions share a classid
/// the first one in the descriptions array wins. classid+instanceid would be
/// the stricter key but the data is keyed the loose way.
pub fn parse_inventory(inventory: &Inventory) -> Vec<ParsedItem> {
    let mut desc_map: HashMap<&str, &RawDescription> = HashMap::new(); // classid key
    for desc in &inventory.descriptions {
        desc_map.entry(desc.classid.as_str()).or_insert(desc);
    }

    let mut items: Vec<ParsedItem> = Vec::with_capacity(inventory.assets.len());

    for asset in &inventory.assets {
        // Assets without a description show up in partially documented responses, skip those
        let Some(description) = desc_map.get(asset.classid.as_str()) else { continue };

        let inspect_link: Option<String> = description
            .actions
            .first()
            .and_then(|action| action.link.as_deref())
            .filter(|link| !link.is_empty())
            .map(str::to_owned);

        items.push(ParsedItem {
            appid: asset.appid,
            contextid: asset.contextid.clone(),
            assetid: asset.assetid.clone(),
            classid: asset.classid.clone(),
            instanceid: asset.instanceid.clone(),
            name: description.name.clone(),
            market_hash_name: description.market_hash_name.clone(),
            icon_url: description.icon_url.clone(),
            name_color: description.name_color.clone(),
            tradable: description.tradable != 0,
            inspect_link,
        });
    }

    items
}
