pub mod chat;
pub mod contact;
pub mod sections;
pub mod shared;

pub use chat::{ChatLauncher, ChatResponder, ChatWidget};
pub use contact::ContactSection;
pub use sections::{FaqSection, Footer, Hero, HowItWorks, Testimonials, WhyChooseUs};
