//! Serializable catalog types shared by the data source, pipeline, cart and UI.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::logic::FetchPlan;

/// Nutrient name to numeric value mapping (e.g. `sugars_100g`).
///
/// Sparse: any key may be absent. Non-numeric upstream values (units, labels)
/// are dropped while decoding.
pub type Nutriments = BTreeMap<String, f64>;

/// A product snapshot as received from the catalog API.
///
/// Products are never mutated after decoding; lists of them are only
/// reordered, filtered, or concatenated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product code (barcode).
    #[serde(default, deserialize_with = "de_code")]
    pub code: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// English display name, when the upstream record carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name_en: Option<String>,
    /// Comma-separated brand names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<String>,
    /// Human-readable categories text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Category tags such as `en:breakfast-cereals`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories_tags: Option<Vec<String>>,
    /// Main image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Front-of-pack image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_front_url: Option<String>,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_small_url: Option<String>,
    /// Ingredient list as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_text: Option<String>,
    /// English ingredient list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_text_en: Option<String>,
    /// Nutrition grade as reported upstream (`a`..`e`, `unknown`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_grades: Option<String>,
    /// Nutrient values per 100 g.
    #[serde(
        default,
        deserialize_with = "de_nutriments",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutriments: Option<Nutriments>,
    /// Labels as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// Label tags such as `en:organic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_tags: Option<Vec<String>>,
    /// Net quantity text (e.g. `400 g`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Serving size text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// NOVA processing group (1-4).
    #[serde(
        default,
        deserialize_with = "de_opt_u8_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub nova_group: Option<u8>,
    /// Eco-score grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecoscore_grade: Option<String>,
}

impl Product {
    /// What: Name used for ordering; a product without a name sorts as `""`.
    #[must_use]
    pub fn sort_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or("")
    }

    /// What: Return the nutrition grade when it is one of `a`..`e`.
    ///
    /// Output:
    /// - Lower-case grade letter; `None` for missing, empty, `unknown`, `not-applicable`.
    #[must_use]
    pub fn grade(&self) -> Option<char> {
        let g = self.nutrition_grades.as_deref()?.trim();
        let mut chars = g.chars();
        let c = chars.next()?.to_ascii_lowercase();
        if chars.next().is_none() && ('a'..='e').contains(&c) {
            Some(c)
        } else {
            None
        }
    }

    /// What: Look up a nutrient value per 100 g.
    #[must_use]
    pub fn nutriment(&self, key: &str) -> Option<f64> {
        self.nutriments.as_ref()?.get(key).copied()
    }
}

/// One page of search/listing results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Total number of matches upstream (informational only).
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub count: u64,
    /// Page number echoed by the API.
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub page: u64,
    /// Number of pages upstream.
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub page_count: u64,
    /// Page size echoed by the API.
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub page_size: u64,
    /// Products on this page.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Offset of the first product.
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub skip: u64,
    /// Set when this page stands in for a failed request.
    #[serde(skip)]
    pub failed: bool,
}

impl SearchPage {
    /// What: Build the empty page returned in place of a failed request.
    ///
    /// Inputs:
    /// - `page_size`: Page size that was requested.
    ///
    /// Output:
    /// - `{count: 0, page: 1, page_count: 0, products: [], skip: 0}` marked as failed.
    #[must_use]
    pub fn failed(page_size: u32) -> Self {
        Self {
            count: 0,
            page: 1,
            page_count: 0,
            page_size: u64::from(page_size),
            products: Vec::new(),
            skip: 0,
            failed: true,
        }
    }
}

/// Category entry from the taxonomy listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Taxonomy identifier (e.g. `en:snacks`).
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Number of products in the category.
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub products: u64,
    /// Category page URL.
    #[serde(default)]
    pub url: String,
}

/// Envelope of the `categories.json` endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryResponse {
    /// All category tags.
    #[serde(default)]
    pub tags: Vec<Category>,
}

/// Envelope of the single-product endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductResponse {
    /// Product, absent when the code is unknown.
    #[serde(default)]
    pub product: Option<Product>,
}

/// How the free-text term is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Full-text search on product names.
    #[default]
    Name,
    /// Exact lookup by barcode.
    Barcode,
}

impl SearchMode {
    /// What: Settings/CLI key for this mode.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Barcode => "barcode",
        }
    }

    /// What: Parse a mode from its key or an alias; `None` when unknown.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "text" | "product_name" => Some(Self::Name),
            "barcode" | "identifier" | "code" | "ean" => Some(Self::Barcode),
            _ => None,
        }
    }

    /// What: Flip between name and barcode search.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Barcode,
            Self::Barcode => Self::Name,
        }
    }

    /// What: Short label for the search box title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::Barcode => "Barcode",
        }
    }
}

/// Sorting mode applied to each fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Name A-Z.
    #[default]
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Nutrition grade A to E; ungraded last.
    GradeAsc,
    /// Nutrition grade E to A; ungraded first.
    GradeDesc,
}

impl SortMode {
    /// All modes in menu order.
    pub const ALL: [Self; 4] = [Self::NameAsc, Self::NameDesc, Self::GradeAsc, Self::GradeDesc];

    /// What: Return the string key used in settings files for this sort mode.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::GradeAsc => "grade_asc",
            Self::GradeDesc => "grade_desc",
        }
    }

    /// What: Parse a sort mode from its settings key or aliases.
    ///
    /// Inputs: `s` config string (case-insensitive).
    ///
    /// Output: `Some(SortMode)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name_asc" | "name" | "alphabetical" | "a_z" => Some(Self::NameAsc),
            "name_desc" | "z_a" => Some(Self::NameDesc),
            "grade_asc" | "grade" | "nutriscore" => Some(Self::GradeAsc),
            "grade_desc" => Some(Self::GradeDesc),
            _ => None,
        }
    }

    /// What: Human label shown in the sort menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::GradeAsc => "Nutrition Grade (A to E)",
            Self::GradeDesc => "Nutrition Grade (E to A)",
        }
    }

    /// What: Next mode in menu order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NameAsc => Self::NameDesc,
            Self::NameDesc => Self::GradeAsc,
            Self::GradeAsc => Self::GradeDesc,
            Self::GradeDesc => Self::NameAsc,
        }
    }
}

/// Whether fetched products replace or extend the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Discard the current list (new search, filter or sort).
    Replace,
    /// Concatenate onto the current list (load more).
    Append,
}

/// Fetch request sent to the background worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// What to fetch.
    pub plan: FetchPlan,
    /// How the outcome is merged into the displayed list.
    pub merge: MergeMode,
    /// Sort applied to the fetched page.
    pub sort: SortMode,
    /// Configured page size.
    pub page_size: u32,
}

/// Outcome of a [`FetchRequest`], already sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchResults {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed merge mode.
    pub merge: MergeMode,
    /// Page products in display order.
    pub products: Vec<Product>,
    /// Whether another page may exist.
    pub has_more: bool,
    /// Whether the data source failed (normalized to an empty page).
    pub failed: bool,
}

/// What: Accept a product code given as a string or a bare number.
fn de_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// What: Decode a nutriments object keeping only numeric entries.
///
/// Details:
/// - Numeric strings (`"1.5"`) are accepted; units and labels are skipped.
#[allow(clippy::unnecessary_wraps)]
fn de_nutriments<'de, D>(deserializer: D) -> Result<Option<Nutriments>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let out: Nutriments = map
        .into_iter()
        .filter_map(|(k, v)| value_as_f64(&v).map(|n| (k, n)))
        .collect();
    Ok(Some(out))
}

/// What: Decode an optional small integer given as number or numeric string.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn de_opt_u8_lenient<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&v).and_then(|n| {
        if n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n) {
            Some(n as u8)
        } else {
            None
        }
    }))
}

/// What: Decode a counter given as number or numeric string; anything else is 0.
fn de_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// What: Read a JSON number or numeric string as `f64`.
fn value_as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
