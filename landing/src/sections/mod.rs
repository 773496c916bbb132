// Landing page sections, in document order

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod lightbox;
mod location;
mod portfolio;
mod products;
mod stats;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use location::Location;
pub use portfolio::Portfolio;
pub use products::Products;
pub use stats::Stats;
pub use testimonials::Testimonials;
