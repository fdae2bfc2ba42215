pub mod buttons;
pub mod cards;
pub mod toast;

pub use buttons::{Button, ButtonVariant};
pub use cards::PricingCard;
pub use toast::Toast;
