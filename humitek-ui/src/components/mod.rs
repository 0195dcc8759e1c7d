//! Shared UI components

pub mod before_after;
pub mod button;
pub mod contact_form;
pub mod contact_section;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod icons;
pub mod pill;
pub mod process;
pub mod section;
pub mod select;
pub mod services;
pub mod testimonials;
pub mod text_input;

pub use before_after::BeforeAfter;
pub use button::{Button, ButtonSize, ButtonVariant, CtaLink};
pub use contact_form::ContactFormView;
pub use contact_section::ContactSection;
pub use faq::{FaqItem, FaqSection};
pub use footer::SiteFooter;
pub use gallery::GallerySection;
pub use header::SiteHeader;
pub use hero::Hero;
pub use icons::{
    ArrowRightIcon, BadgeCheckIcon, CalendarDaysIcon, CameraIcon, ChevronDownIcon,
    CircleCheckIcon, DropletsIcon, MapPinIcon, PhoneIcon, RulerIcon, ShieldCheckIcon, StarIcon,
    WrenchIcon,
};
pub use pill::Pill;
pub use process::ProcessSection;
pub use section::{Container, SectionTitle};
pub use select::ProblemSelect;
pub use services::ServicesSection;
pub use testimonials::TestimonialsSection;
pub use text_input::{FormField, TextArea, TextInput};
