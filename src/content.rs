// Copy for the repeated cards on the page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub color: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub text: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub desc: &'static str,
    pub button: &'static str,
    pub highlight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fas fa-circle-check",
        color: "#3b82f6",
        title: "Organize Easily",
        desc: "Sort and prioritize tasks with just a few clicks for maximum productivity.",
    },
    Feature {
        icon: "fas fa-bolt",
        color: "#eab308",
        title: "Boost Your Focus",
        desc: "Stay on track with reminders and distraction-free modes.",
    },
    Feature {
        icon: "fas fa-users",
        color: "#22c55e",
        title: "Team Collaboration",
        desc: "Share tasks and work seamlessly with your whole team.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "TaskFlow completely changed the way I manage my projects. I feel in control every day!",
        name: "Sarah W.",
        role: "Freelancer",
    },
    Testimonial {
        text: "Our team productivity doubled. The collaboration tools are just perfect!",
        name: "David L.",
        role: "Startup Founder",
    },
    Testimonial {
        text: "Finally, an app that’s simple, fast, and keeps me on track with my goals!",
        name: "Emily R.",
        role: "Marketing Manager",
    },
];

pub const PLANS: [Plan; 3] = [
    Plan { name: "Free", price: "$0", desc: "Perfect for personal use.", button: "Get Started", highlight: false },
    Plan { name: "Pro", price: "$12/mo", desc: "For power users and small teams.", button: "Upgrade", highlight: true },
    Plan { name: "Team", price: "$30/mo", desc: "For larger groups and companies.", button: "Get Started", highlight: false },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "Facebook", icon: "fab fa-facebook", href: "#" },
    SocialLink { label: "Twitter", icon: "fab fa-twitter", href: "#" },
    SocialLink { label: "LinkedIn", icon: "fab fa-linkedin", href: "#" },
];
