// Plan data and page text
pub mod catalog;
pub mod copy;
pub mod plan;

// Presentation and behaviour, independent of any rendering backend
pub mod card;
pub mod config;
#[cfg(feature = "headless")]
pub mod page;
pub mod toast;

pub use card::{FeatureItem, PlanCard};
pub use catalog::Catalog;
pub use config::PageConfig;
pub use copy::{Locale, PageCopy};
#[cfg(feature = "headless")]
pub use page::{PricingPage, ToastView};
pub use plan::PricingPlan;
pub use toast::{TimerRequest, ToastConfig, ToastMachine, ToastPhase, ToastStep, ToastTrigger};
