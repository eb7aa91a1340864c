
#[cfg(debug_assertions)]
pub fn is_dev() -> bool {
    true  // Development build, verbose console diagnostics
}

#[cfg(not(debug_assertions))]
pub fn is_dev() -> bool {
    false  // Production build
}

pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub url: &'static str,
}

pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "NEBULA",
    title: "NEBULA - Crafting Code With Purpose",
    description: "Portfolio website of Garv Yadav - A passionate MERN stack developer crafting clean, interactive, and human-centered digital experiences.",
    author: "Garv Yadav",
    url: "https://nebula.dev",
};

pub const CONTACT: ContactInfo = ContactInfo {
    email: "garv@example.com",
    phone: "+1 (234) 567-890",
    location: "Available Worldwide",
};

pub const SOCIALS: SocialLinks = SocialLinks {
    github: "https://github.com/Garvyadav888",
    linkedin: "https://www.linkedin.com/in/garv-yadav-9a3237287",
    twitter: "https://twitter.com/yourusername",
};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_PLACEHOLDER: &str = "YOUR_SERVICE_ID";
pub const TEMPLATE_ID_PLACEHOLDER: &str = "YOUR_TEMPLATE_ID";
pub const PUBLIC_KEY_PLACEHOLDER: &str = "YOUR_PUBLIC_KEY";

// Set at build time, e.g. `EMAILJS_SERVICE_ID=service_x trunk build --release`
pub const EMAILJS_SERVICE_ID: &str = match option_env!("EMAILJS_SERVICE_ID") {
    Some(id) => id,
    None => SERVICE_ID_PLACEHOLDER,
};

pub const EMAILJS_TEMPLATE_ID: &str = match option_env!("EMAILJS_TEMPLATE_ID") {
    Some(id) => id,
    None => TEMPLATE_ID_PLACEHOLDER,
};

pub const EMAILJS_PUBLIC_KEY: &str = match option_env!("EMAILJS_PUBLIC_KEY") {
    Some(key) => key,
    None => PUBLIC_KEY_PLACEHOLDER,
};

/// `tel:` target for the phone number, whitespace stripped.
pub fn phone_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// `mailto:` target with a prefilled subject line.
pub fn mailto_href(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_href_strips_whitespace() {
        assert_eq!(phone_href("+1 (234) 567-890"), "tel:+1(234)567-890");
    }

    #[test]
    fn mailto_href_encodes_subject() {
        assert_eq!(
            mailto_href("garv@example.com", "Hello there"),
            "mailto:garv@example.com?subject=Hello%20there"
        );
    }
}
