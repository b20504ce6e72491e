mod icons;
mod scene;
mod section;

pub mod about;
pub mod buttons;
pub mod contact;

pub use icons::ChannelIcon;
pub use scene::EarthScene;
pub use section::SectionWrapper;
