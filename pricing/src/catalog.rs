use anyhow::{Context, bail, ensure};
use std::collections::HashSet;

use crate::copy::Locale;
use crate::plan::PricingPlan;

const PLANS_ZH_CN: &str = include_str!("../data/plans.zh-CN.json");
const PLANS_EN: &str = include_str!("../data/plans.en.json");

/// Ordered, validated list of plans. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<PricingPlan>,
}

impl Catalog {
    pub fn new(plans: Vec<PricingPlan>) -> anyhow::Result<Self> {
        validate(&plans)?;
        Ok(Self { plans })
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let plans: Vec<PricingPlan> =
            serde_json::from_str(json).context("Failed to decode plan catalog")?;
        Self::new(plans)
    }

    /// The compiled-in catalog for `locale`.
    pub fn builtin(locale: Locale) -> anyhow::Result<Self> {
        let json = match locale {
            Locale::ZhCn => PLANS_ZH_CN,
            Locale::En => PLANS_EN,
        };
        Self::from_json(json).with_context(|| format!("Built-in catalog for {}", locale.tag()))
    }

    pub fn plans(&self) -> &[PricingPlan] {
        &self.plans
    }

    pub fn get(&self, id: &str) -> Option<&PricingPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn popular(&self) -> Option<&PricingPlan> {
        self.plans.iter().find(|p| p.is_popular)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

fn validate(plans: &[PricingPlan]) -> anyhow::Result<()> {
    ensure!(!plans.is_empty(), "Catalog has no plans");

    let mut ids = HashSet::new();
    let mut popular: Option<&str> = None;

    for plan in plans {
        ensure!(!plan.id.trim().is_empty(), "Plan '{}' has an empty id", plan.name);
        if !ids.insert(plan.id.as_str()) {
            bail!("Duplicate plan id '{}'", plan.id);
        }
        ensure!(!plan.features.is_empty(), "Plan '{}' lists no features", plan.id);

        if plan.is_popular {
            if let Some(first) = popular {
                bail!("Plans '{}' and '{}' are both marked popular", first, plan.id);
            }
            popular = Some(plan.id.as_str());
        }
    }

    Ok(())
}
