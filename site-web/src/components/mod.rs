//! UI Components

pub mod footer;
pub mod icons;
pub mod motion;

pub use footer::Footer;
pub use icons::GlyphIcon;
pub use motion::{provide_motion, use_motion, MotionPreference};
