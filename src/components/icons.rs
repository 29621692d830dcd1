//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBriefcase as Briefcase, LuCode as Code, LuFileText as Resume, LuGithub as Github,
        LuHouse as Home, LuLinkedin as Linkedin, LuMail as Mail, LuMenu as Menu,
        LuMessageCircle as Chat, LuMoon as Moon, LuSun as Sun, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBriefcase as Briefcase, BsChatDots as Chat, BsCodeSlash as Code,
        BsEnvelope as Mail, BsFileEarmarkText as Resume, BsGithub as Github,
        BsHouseFill as Home, BsLinkedin as Linkedin, BsList as Menu, BsMoonFill as Moon,
        BsPerson as User, BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(USER, User);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(RESUME, Resume);
themed_icon!(CODE, Code);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(MAIL, Mail);
themed_icon!(CHAT, Chat);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(GITHUB, Github);

/// Icon for a navigation route, index-aligned with `config::routes::KNOWN`.
pub fn route_icon(index: usize) -> Icon {
    match index {
        0 => HOME,
        1 => USER,
        2 => BRIEFCASE,
        3 => RESUME,
        _ => CODE,
    }
}
