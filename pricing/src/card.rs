use crate::copy::PageCopy;
use crate::plan::PricingPlan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: &'static str,
    pub text: String,
}

/// View model of one plan card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCard {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub period: &'static str,
    pub description: String,
    pub cta_label: &'static str,
    badge: Option<&'static str>,
    features: Vec<FeatureItem>,
}

impl PlanCard {
    pub fn render(plan: &PricingPlan, copy: &PageCopy) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            amount: plan.price.clone(),
            period: copy.period,
            description: plan.description.clone(),
            cta_label: copy.cta,
            badge: plan.is_popular.then_some(copy.badge),
            features: plan
                .features
                .iter()
                .map(|text| FeatureItem {
                    icon: copy.check,
                    text: text.clone(),
                })
                .collect(),
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        self.badge
    }

    pub fn is_popular(&self) -> bool {
        self.badge.is_some()
    }

    pub fn features(&self) -> &[FeatureItem] {
        &self.features
    }

    pub fn price_text(&self) -> String {
        format!("{}{}", self.amount, self.period)
    }

    pub fn class(&self) -> &'static str {
        if self.is_popular() {
            "pricing-card popular"
        } else {
            "pricing-card"
        }
    }

    /// Handles one CTA click: the callback, if any, receives this card's plan id once.
    pub fn select<F>(&self, on_select: Option<F>)
    where
        F: FnOnce(&str),
    {
        if let Some(on_select) = on_select {
            on_select(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::Locale;

    fn pro() -> PricingPlan {
        PricingPlan::new("pro", "Pro", "299", "For teams")
            .with_features(["10 seats", "Priority"])
            .popular()
    }

    #[test]
    fn test_popular_card() {
        let card = PlanCard::render(&pro(), Locale::ZhCn.copy());
        assert_eq!(card.badge(), Some("最受欢迎"));
        assert_eq!(card.class(), "pricing-card popular");
        assert_eq!(card.amount, "299");
        assert_eq!(card.price_text(), "299/月");
        assert_eq!(card.cta_label, "立即开始");
    }

    #[test]
    fn test_regular_card_has_no_badge() {
        let plan = PricingPlan::new("basic", "Basic", "99", "Solo").with_features(["1 seat"]);
        let card = PlanCard::render(&plan, Locale::En.copy());
        assert_eq!(card.badge(), None);
        assert_eq!(card.class(), "pricing-card");
        assert_eq!(card.price_text(), "99/month");
    }

    #[test]
    fn test_features_keep_order_and_checkmark() {
        let card = PlanCard::render(&pro(), Locale::En.copy());
        let texts: Vec<_> = card.features().iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["10 seats", "Priority"]);
        assert!(card.features().iter().all(|f| f.icon == "✓"));
    }

    #[test]
    fn test_empty_feature_list_renders_empty_region() {
        let plan = PricingPlan::new("bare", "Bare", "0", "Nothing");
        let card = PlanCard::render(&plan, Locale::En.copy());
        assert!(card.features().is_empty());
    }

    #[test]
    fn test_select_invokes_callback_once_with_id() {
        let card = PlanCard::render(&pro(), Locale::En.copy());
        let mut seen = Vec::new();
        card.select(Some(|id: &str| seen.push(id.to_string())));
        card.select(Some(|id: &str| seen.push(id.to_string())));
        assert_eq!(seen, ["pro", "pro"]);
    }

    #[test]
    fn test_select_without_callback_is_noop() {
        let card = PlanCard::render(&pro(), Locale::En.copy());
        card.select(None::<fn(&str)>);
    }
}
