use serde_json::Value;

use crate::models::web::FloatInfo;

/// Pulls the float fields out of an iteminfo payload from the float API.
pub fn parse_iteminfo_min(data: &Value) -> Result<FloatInfo, String> {
    let float_value = data.get("floatvalue")
        .and_then(|f| f.as_f64())
        .ok_or_else(|| String::from("floatvalue NOT FOUND"))?;

    let paint_seed = data.get("paintseed")
        .and_then(|p| p.as_f64())
        .map(|p| p as u32)
        .ok_or_else(|| String::from("paintseed NOT FOUND"))?;

    let paint_index = data.get("paintindex")
        .and_then(|p| p.as_f64())
        .map(|p| p as u32)
        .ok_or_else(|| String::from("paintindex NOT FOUND"))?;

    Ok(FloatInfo { float_value, paint_seed, paint_index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_full_iteminfo_payload() {
        let data = json!({
            "floatvalue": 0.254,
            "paintseed": 412,
            "paintindex": 282,
            "full_item_name": "AK-47 | Redline (Field-Tested)"
        });

        let info = parse_iteminfo_min(&data).unwrap();
        assert_eq!(info.float_value, 0.254);
        assert_eq!(info.paint_seed, 412);
        assert_eq!(info.paint_index, 282);
    }

    #[test]
    fn missing_floatvalue_is_an_error() {
        let data = json!({ "paintseed": 412, "paintindex": 282 });

        let err = parse_iteminfo_min(&data).unwrap_err();
        assert!(err.contains("floatvalue"));
    }

    #[test]
    fn missing_paint_fields_are_an_error() {
        let data = json!({ "floatvalue": 0.254 });
        assert!(parse_iteminfo_min(&data).is_err());
    }
}
