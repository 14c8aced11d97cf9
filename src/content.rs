//! Static copy for the landing page sections.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub rating: usize,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct LinkColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const HERO_TAGLINE: &str =
    "Turn your unused software into cash in just a few clicks. Simple, secure, and profitable.";

pub static HOW_IT_WORKS: [Feature; 3] = [
    Feature {
        icon: "⇪",
        title: "Upload License",
        description: "Provide your software license details through our secure portal.",
    },
    Feature {
        icon: "$",
        title: "Get Valuation",
        description: "Receive an instant and fair market-based valuation.",
    },
    Feature {
        icon: "▭",
        title: "Get Paid",
        description: "Receive payment quickly through your preferred method.",
    },
];

pub static WHY_CHOOSE_US: [Feature; 4] = [
    Feature {
        icon: "⛨",
        title: "Secure Process",
        description: "End-to-end encryption for your data.",
    },
    Feature {
        icon: "⌗",
        title: "Fair Pricing",
        description: "We offer market competitive quotes.",
    },
    Feature {
        icon: "◷",
        title: "Fast Payments",
        description: "Get paid within 24 hours.",
    },
    Feature {
        icon: "☺",
        title: "Expert Support",
        description: "Our team is here to help you 24/7.",
    },
];

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        text: "SoftSell helped me monetize unused licenses hassle-free. The process was transparent and the valuation exceeded my expectations.",
        author: "Sarah T., IT Manager, ByteCorp",
        rating: 5,
    },
    Testimonial {
        text: "Quick and easy platform. Got payment within a day. Their support team was particularly helpful when I had questions about the process.",
        author: "James R., Procurement Lead, AppWorld",
        rating: 5,
    },
];

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "What types of software licenses can I sell?",
        answer: "You can sell almost any commercial software license, including operating systems, design software, security solutions, office suites, and development tools. Our platform currently supports over 500 software vendors.",
    },
    Faq {
        question: "How is the value of my license determined?",
        answer: "We use current market data, remaining validity period, software type, version, and demand to determine a fair value for your license. Our algorithm is continuously updated to reflect current market conditions.",
    },
    Faq {
        question: "How long does the process take?",
        answer: "The entire process typically takes 1-2 business days. License verification usually completes within hours, and payment is processed within 24 hours after verification.",
    },
    Faq {
        question: "Is my data secure when I sell my license?",
        answer: "Absolutely. We use bank-grade encryption for all data transmission and storage. Your privacy and security are our top priorities, and we never share your information with third parties without your explicit consent.",
    },
];

pub const FOOTER_BLURB: &str = "The leading marketplace for software license reselling.";

pub static FOOTER_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        heading: "Quick Links",
        links: &["How It Works", "Sell License", "Pricing"],
    },
    LinkColumn {
        heading: "Support",
        links: &["FAQ", "Contact Us", "Help Center"],
    },
    LinkColumn {
        heading: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Cookie Policy"],
    },
];

pub fn rating_stars(rating: usize) -> String {
    "★".repeat(rating.min(5))
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} SoftSell. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(rating_stars(3), "★★★");
        assert_eq!(rating_stars(9).chars().count(), 5);
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2025), "© 2025 SoftSell. All rights reserved.");
    }
}
