//! Page sections, top to bottom

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod services;
pub mod solutions;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navigation::{Navigation, scroll_to_section};
pub use services::ServicesSection;
pub use solutions::SolutionsSection;
