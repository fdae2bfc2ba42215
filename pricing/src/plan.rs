use serde::{Deserialize, Serialize};

/// One purchasable tier shown on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_popular: bool,
}

impl PricingPlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            description: description.into(),
            features: Vec::new(),
            is_popular: false,
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_popular_defaults_to_false() {
        let plan: PricingPlan = serde_json::from_str(
            r#"{"id":"basic","name":"Basic","price":"99","description":"d","features":["a"]}"#,
        )
        .unwrap();
        assert!(!plan.is_popular);
        assert_eq!(plan.features, vec!["a".to_string()]);
    }

    #[test]
    fn test_camel_case_popular_flag() {
        let plan: PricingPlan = serde_json::from_str(
            r#"{"id":"pro","name":"Pro","price":"299","description":"d","features":[],"isPopular":true}"#,
        )
        .unwrap();
        assert!(plan.is_popular);

        let json = serde_json::to_value(PricingPlan::new("basic", "Basic", "99", "d")).unwrap();
        assert!(json.get("isPopular").is_none());
    }
}
