//! Tests for asset domain models.

#[cfg(test)]
mod tests {
    use crate::assets::{Asset, NewAsset};
    use crate::errors::{Error, ValidationError};
    use serde_json::json;

    fn new_asset() -> NewAsset {
        NewAsset {
            class: "FIIs".to_string(),
            ticker: "hglg11".to_string(),
            note: String::new(),
            score: 8.0,
            quantity: 10.0,
            current_price: 160.0,
            average_price: 150.0,
        }
    }

    #[test]
    fn test_market_value_and_cost_basis() {
        let asset = new_asset().into_asset("a1".to_string());
        assert_eq!(asset.market_value(), 1600.0);
        assert_eq!(asset.cost_basis(), 1500.0);
    }

    #[test]
    fn test_held_and_watchlisted_flags() {
        let mut asset = new_asset().into_asset("a1".to_string());
        assert!(asset.is_held());
        assert!(!asset.is_watchlisted());
        assert!(asset.is_contribution_candidate());

        asset.quantity = 0.0;
        assert!(!asset.is_held());
        assert!(asset.is_watchlisted());
        assert!(asset.is_contribution_candidate());

        asset.score = 0.0;
        assert!(!asset.is_watchlisted());
        assert!(!asset.is_contribution_candidate());
    }

    #[test]
    fn test_into_asset_normalizes_ticker() {
        let asset = new_asset().into_asset("a1".to_string());
        assert_eq!(asset.ticker, "HGLG11");
        assert_eq!(asset.total_dividends, 0.0);
    }

    #[test]
    fn test_validate_accepts_valid_input() {
        assert!(new_asset().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_ticker() {
        let mut input = new_asset();
        input.ticker = "  ".to_string();
        match input.validate() {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "ticker")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut input = new_asset();
        input.current_price = -1.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_score_out_of_range() {
        let mut input = new_asset();
        input.score = 16.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_deserialize_legacy_shape_defaults_missing_fields() {
        let value = json!({
            "id": "x1",
            "class": "Cripto",
            "ticker": "BTC",
            "quantity": 0.5,
            "currentPrice": 300000.0,
            "idealPercentage": 12
        });
        let asset: Asset = serde_json::from_value(value).unwrap();
        assert_eq!(asset.score, 0.0);
        assert_eq!(asset.average_price, 0.0);
        assert_eq!(asset.total_dividends, 0.0);
        assert_eq!(asset.note, "");
        assert_eq!(asset.market_value(), 150000.0);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let asset = new_asset().into_asset("a1".to_string());
        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["currentPrice"], json!(160.0));
        assert_eq!(value["totalDividends"], json!(0.0));
        assert_eq!(value["class"], json!("FIIs"));
    }
}
