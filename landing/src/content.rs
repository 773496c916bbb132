// Static page content

/// `<section>` ids. Components render these and nav links target them.
pub mod section {
    pub const HOME: &str = "home";
    pub const PRODUCTS: &str = "products";
    pub const ABOUT: &str = "about";
    pub const PORTFOLIO: &str = "portfolio";
    pub const STATS: &str = "stats";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";
    pub const LOCATION: &str = "location";
}

pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Fragment href, e.g. `#home`.
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { section: section::HOME, label: "Home" },
    NavLink { section: section::PRODUCTS, label: "Products" },
    NavLink { section: section::ABOUT, label: "About" },
    NavLink { section: section::PORTFOLIO, label: "Projects" },
    NavLink { section: section::TESTIMONIALS, label: "Testimonials" },
    NavLink { section: section::CONTACT, label: "Contact" },
    NavLink { section: section::LOCATION, label: "Location" },
];

pub struct Category {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        icon: "fa-solid fa-screwdriver-wrench",
        title: "Hand Tools",
        description: "Insulated screwdrivers, pliers, strippers and crimpers rated to 1000V.",
    },
    Category {
        icon: "fa-solid fa-bolt",
        title: "Power Tools",
        description: "Cordless drills, impact drivers and SDS hammers from trusted brands.",
    },
    Category {
        icon: "fa-solid fa-gauge-high",
        title: "Test & Measurement",
        description: "Multimeters, clamp meters, insulation testers and voltage detectors.",
    },
    Category {
        icon: "fa-solid fa-plug",
        title: "Wiring & Cable",
        description: "Cable, conduit, connectors and terminations cut to length on request.",
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-solid fa-truck-fast",
        title: "Next-Day Delivery",
        description: "Order before 4pm and it is on site the next working morning.",
    },
    Feature {
        icon: "fa-solid fa-shield-halved",
        title: "Certified Safety",
        description: "Every insulated tool is tested and certified to IEC 60900.",
    },
    Feature {
        icon: "fa-solid fa-headset",
        title: "Trade Support",
        description: "Qualified electricians on the phone to help you pick the right kit.",
    },
];

pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        image: "assets/img/project-warehouse.jpg",
        title: "Warehouse Lighting Retrofit",
        category: "Commercial",
    },
    Project {
        image: "assets/img/project-solar.jpg",
        title: "Rooftop Solar Install",
        category: "Renewables",
    },
    Project {
        image: "assets/img/project-panel.jpg",
        title: "Distribution Board Upgrade",
        category: "Industrial",
    },
    Project {
        image: "assets/img/project-home.jpg",
        title: "Smart Home Rewire",
        category: "Residential",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "25+", label: "Years in Trade" },
    Stat { value: "12k", label: "Products in Stock" },
    Stat { value: "8,500", label: "Contractors Served" },
    Stat { value: "98%", label: "Same-Week Dispatch" },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The only supplier that has never let us down on a deadline. Stock is always where they say it is.",
        author: "Marcus Hale",
        role: "Site Manager, Hale Electrical",
    },
    Testimonial {
        quote: "Their test equipment range is unmatched and the calibration service saves us weeks every year.",
        author: "Priya Natarajan",
        role: "Compliance Lead, GridSafe",
    },
    Testimonial {
        quote: "Phoned at 3pm for a full rewire kit, it was on the van at 7 the next morning.",
        author: "Tom Becker",
        role: "Independent Electrician",
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "fa-solid fa-phone",
        text: "+1 (555) 012-3456",
    },
    ContactDetail {
        icon: "fa-solid fa-envelope",
        text: "sales@electrotools.example",
    },
    ContactDetail {
        icon: "fa-solid fa-clock",
        text: "Mon-Fri 7:00-18:00, Sat 8:00-13:00",
    },
];
