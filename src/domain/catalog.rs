//! Static storefront catalog
//!
//! Everything the landing page shows besides the hero rotator's position is
//! plain data. The built-in catalog lives here; a user configuration may
//! replace individual lists (see `infrastructure::config`).

use serde::{Deserialize, Serialize};

use crate::domain::{
    price,
    slide::{Alignment, Slide},
};

pub const BRAND_NAME: &str = "Aathira Trendz";
pub const CONTACT_PHONE: &str = "+91 999 999 9999";
pub const CONTACT_EMAIL: &str = "info@aathiratrendz.com";
pub const CONTACT_ADDRESS: [&str; 2] = [
    "123 Textile Street, Fashion District",
    "Chennai, Tamil Nadu 600001",
];
pub const SHIPPING_BANNER: &str =
    "Worldwide Shipping Available | Free Shipping on Orders Above ₹2000";
pub const CURRENCIES: [&str; 3] = ["INR ₹", "USD $", "GBP £"];
pub const SEARCH_PLACEHOLDER: &str = "Search for sarees, dress materials...";
pub const ABOUT_TEXT: &str = "Your trusted destination for authentic Indian ethnic wear. \
We bring you the finest collection of silk sarees, cotton sarees, and traditional dress \
materials from across India.";
pub const SOCIAL_LINKS: [&str; 4] = ["Facebook", "Instagram", "Twitter", "Youtube"];
pub const QUICK_LINKS: [&str; 6] = [
    "About Us",
    "New Arrivals",
    "Best Sellers",
    "Sale",
    "Store Locator",
    "Blog",
];
pub const CUSTOMER_SERVICE_LINKS: [&str; 6] = [
    "Contact Us",
    "Track Order",
    "Shipping Policy",
    "Return & Exchange",
    "Privacy Policy",
    "Terms & Conditions",
];
pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Sitemap"];
pub const COPYRIGHT: &str = "© 2026 Aathira Trendz. All rights reserved.";
pub const CATEGORY_HEADING: &str = "Shop by Category";
pub const CATEGORY_SUBHEADING: &str =
    "Explore our curated collection of traditional and modern ethnic wear";
pub const PRODUCT_HEADING: &str = "Featured Products";
pub const PRODUCT_SUBHEADING: &str = "Handpicked collection of our finest sarees and ethnic wear";
pub const PRODUCT_RATING: &str = "(4.8)";
pub const NEWSLETTER_HEADING: &str = "Subscribe to Our Newsletter";
pub const NEWSLETTER_TEXT: &str =
    "Get updates on new arrivals, special offers, and exclusive deals";
pub const NEWSLETTER_PLACEHOLDER: &str = "Enter your email";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub image: String,
    /// Free-form size hint such as `150+ Designs`
    pub count: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Whole rupees
    pub price: u32,
    pub original_price: u32,
    pub image: String,
    pub tag: String,
}

impl Product {
    pub fn discount_badge(&self) -> Option<String> {
        price::discount_badge(self.price, self.original_price)
    }

    pub fn display_price(&self) -> String {
        price::format_rupees(self.price)
    }

    pub fn display_original_price(&self) -> String {
        price::format_rupees(self.original_price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Single glyph drawn in front of the title
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// All lists shown on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_slides")]
    pub slides: Vec<Slide>,
    #[serde(default = "default_nav_links")]
    pub nav_links: Vec<NavLink>,
    #[serde(default = "default_features")]
    pub features: Vec<Feature>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    #[serde(default = "default_products")]
    pub products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            nav_links: default_nav_links(),
            features: default_features(),
            categories: default_categories(),
            products: default_products(),
        }
    }
}

fn nav_link(name: &str, href: &str) -> NavLink {
    NavLink {
        name: name.into(),
        href: href.into(),
    }
}

fn category(name: &str, image: &str, count: &str, href: &str) -> Category {
    Category {
        name: name.into(),
        image: image.into(),
        count: count.into(),
        href: href.into(),
    }
}

fn product(id: u32, name: &str, price: u32, original_price: u32, image: &str, tag: &str) -> Product {
    Product {
        id,
        name: name.into(),
        price,
        original_price,
        image: image.into(),
        tag: tag.into(),
    }
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    }
}

pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "/images/hero1.jpg",
            "New Arrivals 2026",
            "Exclusive Collection of Designer Sarees",
            "Handpicked collection featuring traditional craftsmanship",
            "Explore New Collection",
            Alignment::Left,
        ),
        Slide::new(
            "/images/banner-silk.jpg",
            "Exquisite Silk Sarees",
            "Pure Kanchipuram & Banarasi Collection",
            "Timeless elegance meets contemporary style",
            "Shop Silk Collection",
            Alignment::Center,
        ),
        Slide::new(
            "/images/banner-wedding.jpg",
            "Wedding Special",
            "Bridal Wear & Festive Collection",
            "Make your special moments unforgettable",
            "View Bridal Collection",
            Alignment::Right,
        ),
        Slide::new(
            "/images/hero4.jpg",
            "Flat 30% Off",
            "Limited Time Seasonal Sale",
            "Grab your favorites before they are gone",
            "Shop Now",
            Alignment::Center,
        ),
    ]
}

pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        nav_link("New Arrivals", "#new-arrivals"),
        nav_link("Silk Collection", "#silk"),
        nav_link("Cotton Sarees", "#cotton"),
        nav_link("Party Wear", "#party-wear"),
        nav_link("Salwar Kameez", "#salwar"),
        nav_link("Wedding Collection", "#wedding"),
    ]
}

pub fn default_features() -> Vec<Feature> {
    vec![
        feature(
            "✈",
            "Worldwide Shipping",
            "Free shipping on orders above ₹2000",
        ),
        feature("✔", "Secure Payment", "100% secure payment gateway"),
        feature("☎", "24/7 Support", "Dedicated customer support team"),
        feature("⟲", "Easy Returns", "7-day hassle-free return policy"),
    ]
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category(
            "Kanchipuram Silk",
            "/images/WEB_BANNER_02_1.jpg",
            "150+ Designs",
            "#kanchipuram",
        ),
        category(
            "Banarasi Sarees",
            "/images/WEB_BANNER_08_1.jpg",
            "200+ Designs",
            "#banarasi",
        ),
        category(
            "Cotton Sarees",
            "/images/WEB_BANNER_09_1.jpg",
            "180+ Designs",
            "#cotton",
        ),
        category(
            "Wedding Collection",
            "/images/WEB_BANNER_02_1.jpg",
            "120+ Designs",
            "#wedding",
        ),
        category(
            "Party Wear",
            "/images/WEB_BANNER_08_1.jpg",
            "90+ Designs",
            "#party",
        ),
        category(
            "Salwar Kameez",
            "/images/WEB_BANNER_09_1.jpg",
            "140+ Designs",
            "#salwar",
        ),
    ]
}

pub fn default_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Royal Kanchipuram Silk Saree",
            15999,
            21999,
            "/images/WEB_BANNER_02_1.jpg",
            "Bestseller",
        ),
        product(
            2,
            "Premium Banarasi Silk Saree",
            18999,
            24999,
            "/images/WEB_BANNER_08_1.jpg",
            "New",
        ),
        product(
            3,
            "Designer Wedding Saree",
            22999,
            29999,
            "/images/WEB_BANNER_09_1.jpg",
            "Premium",
        ),
        product(
            4,
            "Soft Silk Party Wear Saree",
            12999,
            17999,
            "/images/WEB_BANNER_02_1.jpg",
            "Trending",
        ),
        product(
            5,
            "Cotton Silk Casual Saree",
            8999,
            12999,
            "/images/WEB_BANNER_08_1.jpg",
            "New",
        ),
        product(
            6,
            "Exclusive Bridal Collection",
            32999,
            42999,
            "/images/WEB_BANNER_09_1.jpg",
            "Bestseller",
        ),
        product(
            7,
            "Traditional Temple Border Saree",
            14999,
            19999,
            "/images/WEB_BANNER_02_1.jpg",
            "Premium",
        ),
        product(
            8,
            "Handloom Pure Silk Saree",
            19999,
            26999,
            "/images/WEB_BANNER_08_1.jpg",
            "New",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = Catalog::default();
        assert_eq!(catalog.slides.len(), 4);
        assert_eq!(catalog.nav_links.len(), 6);
        assert_eq!(catalog.features.len(), 4);
        assert_eq!(catalog.categories.len(), 6);
        assert_eq!(catalog.products.len(), 8);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::default();
        let mut ids: Vec<u32> = catalog.products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products.len());
    }

    #[test]
    fn test_product_display_helpers() {
        let catalog = Catalog::default();
        let royal = &catalog.products[0];
        assert_eq!(royal.display_price(), "₹15,999");
        assert_eq!(royal.display_original_price(), "₹21,999");
        assert_eq!(royal.discount_badge(), Some("27% OFF".to_string()));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() -> serde_json::Result<()> {
        let catalog: Catalog = serde_json::from_str(
            r##"{ "nav_links": [ { "name": "Sale", "href": "#sale" } ] }"##,
        )?;
        assert_eq!(catalog.nav_links, vec![nav_link("Sale", "#sale")]);
        assert_eq!(catalog.slides, default_slides());
        assert_eq!(catalog.products, default_products());
        Ok(())
    }
}
