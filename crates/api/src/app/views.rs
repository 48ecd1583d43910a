//! Page composition.
//!
//! Each page reads a [`CatalogState`] and renders one of three states:
//! loading, error (the flat load-failure string), or ready. Pages own no
//! catalog logic beyond choosing which slice of the catalog to show.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use romantica_catalog::CatalogState;
use romantica_messaging::{WhatsAppContact, format_price, whatsapp};
use romantica_products::{Category, Product};

/// Products shown on the home page.
pub const FEATURED_COUNT: usize = 3;
/// Related products shown under a product detail.
pub const RELATED_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum View<T> {
    Loading,
    Error { message: String },
    Ready(T),
}

impl<T> View<T> {
    /// Map the catalog's three states, building the ready page with `ready`.
    fn from_state(state: &CatalogState, ready: impl FnOnce(&CatalogState) -> T) -> Self {
        if state.loading() {
            return View::Loading;
        }
        if let Some(message) = state.error() {
            return View::Error {
                message: message.to_string(),
            };
        }
        View::Ready(ready(state))
    }
}

/// Product presentation card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// `null` when the sheet price was not numeric.
    pub price: f64,
    pub price_display: String,
    pub description: String,
    pub image_url: String,
    pub available: bool,
    pub href: String,
    pub order_url: String,
}

impl ProductCard {
    pub fn new(product: &Product, contact: &WhatsAppContact) -> Self {
        Self {
            id: product.id_typed().to_string(),
            name: product.name().to_string(),
            category: product.category(),
            price: product.price().amount(),
            price_display: format!("LKR {}", format_price(product.price().amount())),
            description: product.description().to_string(),
            image_url: product.image_url().to_string(),
            available: product.is_available(),
            href: product_href(product),
            order_url: contact.order_url(product, None),
        }
    }
}

pub fn product_href(product: &Product) -> String {
    format!("/product/{}", product.id_typed())
}

pub fn category_href(category: Category) -> String {
    format!("/{}", category.as_str())
}

fn cards<'a>(products: impl IntoIterator<Item = &'a Product>, contact: &WhatsAppContact) -> Vec<ProductCard> {
    products
        .into_iter()
        .map(|p| ProductCard::new(p, contact))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

// ---------------------------------------------------------------------------
// Category pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub title: String,
    pub products: Vec<ProductCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

fn category_title(category: Category) -> String {
    format!("{} Collection", category.display_name())
}

fn category_empty_state(category: Category) -> EmptyState {
    let hint = match category {
        Category::PencilArts => "Please check back later for new artworks!",
        Category::Gifts | Category::Accessories => "Please check back later for new arrivals!",
    };
    EmptyState {
        message: format!(
            "No {} available at the moment.",
            category.display_name().to_lowercase()
        ),
        hint: hint.to_string(),
    }
}

pub fn category_page(
    state: &CatalogState,
    category: Category,
    contact: &WhatsAppContact,
) -> View<CategoryPage> {
    View::from_state(state, |state| {
        let products = state.get_by_category(category.as_str());
        let empty = products.is_empty().then(|| category_empty_state(category));
        CategoryPage {
            category,
            title: category_title(category),
            products: cards(&products, contact),
            empty,
        }
    })
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub category: Category,
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub featured: Vec<ProductCard>,
    pub categories: Vec<CategoryLink>,
    pub contact_url: String,
}

pub fn home_page(state: &CatalogState, contact: &WhatsAppContact) -> View<HomePage> {
    View::from_state(state, |state| HomePage {
        featured: cards(state.products().iter().take(FEATURED_COUNT), contact),
        categories: Category::ALL
            .into_iter()
            .map(|category| CategoryLink {
                category,
                name: category.display_name().to_string(),
                href: category_href(category),
            })
            .collect(),
        contact_url: contact.general_url(None),
    })
}

// ---------------------------------------------------------------------------
// Product detail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: ProductCard,
    pub gallery: Vec<String>,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    pub quantity: u32,
    /// Order link carrying the selected quantity.
    pub order_url: String,
    pub breadcrumbs: Vec<Crumb>,
    pub back: Crumb,
    pub related: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "lookup", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ProductLookup {
    NotFound { back_href: String },
    Found(Box<ProductDetail>),
}

/// Detail page for `id`. The lookup only searches the resident collection;
/// a missing id renders the not-found state.
pub fn product_page(
    state: &CatalogState,
    id: &str,
    quantity: u32,
    contact: &WhatsAppContact,
) -> View<ProductLookup> {
    View::from_state(state, |state| match state.find_by_id(id) {
        None => ProductLookup::NotFound {
            back_href: "/".to_string(),
        },
        Some(product) => ProductLookup::Found(Box::new(product_detail(
            state, product, quantity, contact,
        ))),
    })
}

fn product_detail(
    state: &CatalogState,
    product: &Product,
    quantity: u32,
    contact: &WhatsAppContact,
) -> ProductDetail {
    let quantity = quantity.max(1);
    let category = product.category();
    let category_label = category.as_str().replacen('-', " ", 1);

    let related = state
        .products()
        .iter()
        .filter(|p| p.category() == category && p.id_typed() != product.id_typed())
        .take(RELATED_COUNT);

    ProductDetail {
        product: ProductCard::new(product, contact),
        gallery: product.gallery().into_iter().map(str::to_string).collect(),
        features: product.features().into_iter().map(str::to_string).collect(),
        specifications: product.specifications().cloned(),
        quantity,
        order_url: contact.order_url(
            product,
            Some(&whatsapp::order_message_with_quantity(product, quantity)),
        ),
        breadcrumbs: vec![
            Crumb {
                label: "Home".to_string(),
                href: "/".to_string(),
            },
            Crumb {
                label: category_label.clone(),
                href: category_href(category),
            },
            Crumb {
                label: product.name().to_string(),
                href: product_href(product),
            },
        ],
        back: Crumb {
            label: format!("Back to {category_label}"),
            href: category_href(category),
        },
        related: cards(related, contact),
    }
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

pub const ADMIN_FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl core::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "table" => Ok(ViewMode::Table),
            other => Err(format!("unknown view mode {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPage {
    pub stats: AdminStats,
    pub filter: String,
    pub filters: Vec<String>,
    pub view_mode: ViewMode,
    pub products: Vec<ProductCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    /// Reloading the page is the only recovery action.
    pub refresh_href: String,
}

pub fn admin_page(
    state: &CatalogState,
    filter: &str,
    view_mode: ViewMode,
    contact: &WhatsAppContact,
) -> View<AdminPage> {
    View::from_state(state, |state| {
        let products = state.products();
        let available = products.iter().filter(|p| p.is_available()).count();

        let shown = if filter == ADMIN_FILTER_ALL {
            cards(products, contact)
        } else {
            cards(&state.get_by_category(filter), contact)
        };

        AdminPage {
            stats: AdminStats {
                total: products.len(),
                available,
                unavailable: products.len() - available,
                categories: Category::ALL.len(),
            },
            filter: filter.to_string(),
            filters: std::iter::once(ADMIN_FILTER_ALL)
                .chain(Category::ALL.iter().map(Category::as_str))
                .map(str::to_string)
                .collect(),
            view_mode,
            empty_message: shown
                .is_empty()
                .then(|| "No products found for the selected category.".to_string()),
            products: shown,
            loaded_at: state.loaded_at,
            refresh_href: "/admin".to_string(),
        }
    })
}
