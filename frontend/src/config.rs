#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Baked in at build time and sent with every contact submission.
pub fn contact_shared_secret() -> &'static str {
    option_env!("CONTACT_SHARED_SECRET").unwrap_or("")
}

/// Scroll offset (px) past which the welcome section is gone.
pub const HIDE_WELCOME: f64 = 800.0;

pub const HEADLINE: &str = "SUJEET";

pub const TAGLINES: [&str; 2] = ["Full Stack Developer ", "Problem Solver "];

pub const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("Instagram", "https://instagram.com/sujeet_kv"),
    ("LinkedIn", "https://www.linkedin.com/in/sujeet-kumar-693b5128b/"),
];

pub const WELCOME_VIDEOS: [&str; 4] = ["/silver.mp4", "/robo.mp4", "/astranaut.mp4", "/venera.mp4"];

pub const PROJECT_VIDEO: &str = "/Cooking.mp4";
