use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, ValueObject};

/// Product identifier, as assigned by the external data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier, rejecting blank values.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be blank"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

const MINOR_PER_MAJOR: u64 = 100;

/// Non-negative price in the smallest currency unit (e.g. cents).
///
/// On the wire a price is a plain JSON number in major units (`20`, `19.99`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WirePrice", into = "WirePrice")]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    /// Price of a whole number of major units.
    pub fn new(whole: u64) -> Self {
        Self(whole.saturating_mul(MINOR_PER_MAJOR))
    }

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Price from a decimal amount in major units, rounded to the nearest minor unit.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number, got {amount}"
            )));
        }
        let minor = (amount * MINOR_PER_MAJOR as f64).round();
        if minor > u64::MAX as f64 {
            return Err(DomainError::validation(format!("price {amount} is out of range")));
        }
        Ok(Self(minor as u64))
    }

    pub fn minor_units(self) -> u64 {
        self.0
    }

    /// Render with a currency symbol prefix: `$20`, `$19.99`, `$5.05`.
    pub fn display(self, currency: &str) -> String {
        let (major, minor) = (self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR);
        if minor == 0 {
            format!("{currency}{major}")
        } else {
            format!("{currency}{major}.{minor:02}")
        }
    }
}

/// JSON number form of a [`Price`]: integers stay integers, anything else is decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Whole(u64),
    Decimal(f64),
}

impl TryFrom<WirePrice> for Price {
    type Error = DomainError;

    fn try_from(value: WirePrice) -> Result<Self, Self::Error> {
        match value {
            WirePrice::Whole(whole) => Ok(Price::new(whole)),
            WirePrice::Decimal(amount) => Price::from_decimal(amount),
        }
    }
}

impl From<Price> for WirePrice {
    fn from(price: Price) -> Self {
        if price.0 % MINOR_PER_MAJOR == 0 {
            WirePrice::Whole(price.0 / MINOR_PER_MAJOR)
        } else {
            WirePrice::Decimal(price.0 as f64 / MINOR_PER_MAJOR as f64)
        }
    }
}

/// Opaque image reference(s). The data source ships either a single reference
/// or a gallery; the first entry is the one shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    One(String),
    Many(Vec<String>),
}

impl ImageRef {
    pub fn primary(&self) -> Option<&str> {
        match self {
            ImageRef::One(image) => Some(image),
            ImageRef::Many(images) => images.first().map(String::as_str),
        }
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::Many(Vec::new())
    }
}

/// Input for [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub price: Price,
    pub image: ImageRef,
}

/// Immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    sub_category: String,
    price: Price,
    #[serde(default)]
    image: ImageRef,
}

impl Product {
    pub fn new(input: NewProduct) -> DomainResult<Self> {
        let product = Self {
            id: input.id,
            name: input.name,
            description: input.description,
            category: input.category,
            sub_category: input.sub_category,
            price: input.price,
            image: input.image,
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks applied to every record entering a catalog, including ones that
    /// arrive through deserialization.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        Ok(())
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Listing projection handed to the presentation layer.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.primary().map(str::to_owned),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// What a listing tile needs: description and facets are only used for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
}
