use serde::Deserialize;

/// Wire shape of the inventory endpoint before validation. The arrays stay
/// optional so a missing one is reported as a malformed response instead of a
/// serde error.
#[derive(Debug, Deserialize)]
pub struct InventoryResponse {
    #[serde(default)]
    pub success: u8,
    #[serde(default)]
    pub total_inventory_count: u32,
    pub assets: Option<Vec<RawAsset>>,
    pub descriptions: Option<Vec<RawDescription>>,
}

/// Validated inventory. Built once per fetch, read-only afterwards.
#[derive(Debug)]
pub struct Inventory {
    pub assets: Vec<RawAsset>,
    pub descriptions: Vec<RawDescription>,
    pub total_inventory_count: u32,
}

/// One owned instance of an item. assetid is unique per instance, classid
/// links the asset to its description.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub appid: u32,
    #[serde(default)]
    pub contextid: String,
    #[serde(default)]
    pub assetid: String,
    #[serde(default)]
    pub classid: String,
    #[serde(default)]
    pub instanceid: String,
}

/// Display data shared by every asset with the same classid.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDescription {
    #[serde(default)]
    pub classid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market_hash_name: String,
    pub icon_url: Option<String>,
    pub name_color: Option<String>,
    #[serde(default)]
    pub tradable: u8,
    #[serde(default)]
    pub actions: Vec<DescriptionAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionAction {
    pub link: Option<String>,
}

/// Asset joined with its description. inspect_link still carries the
/// %owner_steamid% and %assetid% placeholders, substitution happens right
/// before the float call.
#[derive(Debug, Clone)]
pub struct ParsedItem {
    pub appid: u32,
    pub contextid: String,
    pub assetid: String,
    pub classid: String,
    pub instanceid: String,
    pub name: String,
    pub market_hash_name: String,
    pub icon_url: Option<String>,
    pub name_color: Option<String>,
    pub tradable: bool,
    pub inspect_link: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct FloatInfo {
    pub float_value: f64,
    pub paint_seed: u32,
    pub paint_index: u32,
}

#[derive(Debug, Clone)]
pub struct EnrichedItem {
    pub item: ParsedItem,
    pub inspect_url: String,
    pub float_value: f64,
    pub paint_seed: u32,
    pub paint_index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_response_parses_full_payload() {
        let raw = r#"{
            "success": 1,
            "total_inventory_count": 2,
            "assets": [
                { "appid": 730, "contextid": "2", "assetid": "111", "classid": "901", "instanceid": "0" }
            ],
            "descriptions": [
                {
                    "classid": "901",
                    "name": "AK-47 | Redline",
                    "market_hash_name": "AK-47 | Redline (Field-Tested)",
                    "icon_url": "iconpath",
                    "name_color": "D2D2D2",
                    "tradable": 1,
                    "actions": [ { "link": "steam://rungame/730/%owner_steamid%/+csgo_econ_action_preview%20S%owner_steamid%A%assetid%D123" } ]
                }
            ]
        }"#;

        let response: InventoryResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.success, 1);
        assert_eq!(response.total_inventory_count, 2);

        let assets = response.assets.unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].assetid, "111");
        assert_eq!(assets[0].classid, "901");

        let descriptions = response.descriptions.unwrap();
        assert_eq!(descriptions[0].market_hash_name, "AK-47 | Redline (Field-Tested)");
        assert_eq!(descriptions[0].tradable, 1);
        assert!(descriptions[0].actions[0].link.as_deref().unwrap().contains("%assetid%"));
    }

    #[test]
    fn inventory_response_tolerates_missing_arrays() {
        let response: InventoryResponse = serde_json::from_str(r#"{ "success": 1 }"#).unwrap();

        assert!(response.assets.is_none());
        assert!(response.descriptions.is_none());
        assert_eq!(response.total_inventory_count, 0);
    }
}
