use serde::Deserialize;

/// One price point for a named bidding zone (e.g. `SE3`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRecord {
    pub id: String,
    pub value: f64,
}

impl PriceRecord {
    pub fn new<S: Into<String>>(id: S, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Decoded payload of `/services/controlroom/v2/map/price`.
///
/// Records keep the upstream order; consumers relying on "last one wins" for
/// repeated ids depend on it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceResponse {
    #[serde(rename = "Data")]
    pub data: Vec<PriceRecord>,
    /// Upstream update time in unix milliseconds. Not exported.
    #[serde(rename = "LastUpdated")]
    pub last_updated: f64,
}

impl PriceResponse {
    pub fn new(data: Vec<PriceRecord>, last_updated: f64) -> Self {
        Self { data, last_updated }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceRecord> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_payload() {
        let json = r#"{"Data":[{"id":"SE1","value":42.5},{"id":"SE3","value":38.1}],"LastUpdated":1690000000000}"#;
        let resp: PriceResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.len(), 2);
        assert_eq!(resp.data[0], PriceRecord::new("SE1", 42.5));
        assert_eq!(resp.data[1], PriceRecord::new("SE3", 38.1));
        assert_eq!(resp.last_updated, 1_690_000_000_000.0);
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{"Data":[{"id":"FI","value":1.0,"color":"red"}],"LastUpdated":0,"Extra":true}"#;
        let resp: PriceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data, vec![PriceRecord::new("FI", 1.0)]);
    }

    #[test]
    fn missing_data_is_rejected() {
        let json = r#"{"LastUpdated":1690000000000}"#;
        assert!(serde_json::from_str::<PriceResponse>(json).is_err());
    }

    #[test]
    fn string_value_is_rejected() {
        let json = r#"{"Data":[{"id":"SE1","value":"42.5"}],"LastUpdated":0}"#;
        assert!(serde_json::from_str::<PriceResponse>(json).is_err());
    }

    #[test]
    fn empty_data_is_valid() {
        let resp: PriceResponse = serde_json::from_str(r#"{"Data":[],"LastUpdated":0}"#).unwrap();
        assert!(resp.is_empty());
    }
}
