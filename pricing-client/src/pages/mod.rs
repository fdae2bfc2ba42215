pub mod pricing;

pub use pricing::PricingPage;
