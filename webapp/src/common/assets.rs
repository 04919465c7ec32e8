// fixed paths into the public asset bundle

pub const NAV_LOGO: &str = "/Logo/Bots Overkill _ White _ Transparent.png";
pub const HERO_WORDMARK: &str = "/Logo/BOTSOVERKILL _ White _ Transparent.png";
