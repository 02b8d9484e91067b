//! Link resource implementation.
//!
//! This module provides the [`Link`] resource, a sellable product link, and
//! [`PriceInput`], the accepted forms of a new price.
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::rest::{DirtyTracking, RestResource};
//! use gumroad_api::rest::resources::{Link, LinkField};
//!
//! // List every link
//! for link in Link::find_all(&client).await? {
//!     println!("{}: {:?}", link.id().unwrap_or(""), link.name());
//! }
//!
//! // Update two fields; only those two are sent
//! let mut link = Link::find(&client, "abc").await?;
//! link.set_name("Summer Sale");
//! link.set_price(500)?;
//! assert!(link.is_dirty(LinkField::Price));
//! link.save(&client).await?;
//!
//! // Delete it
//! link.destroy(&client).await?;
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::{FormParams, RestClient};
use crate::rest::{
    DirtySet, DirtyTracking, ResourceError, ResourceOperation, ResourcePath, RestResource,
    TrackedField, ValidationError,
};
use crate::HttpMethod;

/// The trackable fields of a [`Link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkField {
    /// The product name.
    Name,
    /// The URL the link delivers.
    Url,
    /// The product description.
    Description,
    /// The price, in the currency's smallest unit.
    Price,
}

impl TrackedField for LinkField {
    const ALL: &'static [Self] = &[Self::Name, Self::Url, Self::Description, Self::Price];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Url => "url",
            Self::Description => "description",
            Self::Price => "price",
        }
    }
}

/// A value offered as a new price.
///
/// Integers, floats, and text are accepted, but only whole non-negative
/// values pass validation.
///
/// # Example
///
/// ```rust
/// use gumroad_api::rest::resources::PriceInput;
///
/// assert_eq!(PriceInput::from(10.0).to_price(), Ok(10));
/// assert_eq!(PriceInput::from(" 42 ").to_price(), Ok(42));
/// assert!(PriceInput::from(10.5).to_price().is_err());
/// assert!(PriceInput::from(-1).to_price().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    /// An integer price.
    Integer(i64),
    /// A float price; must have no fractional part.
    Float(f64),
    /// A textual price; parsed as an `i64` after trimming whitespace.
    Text(String),
}

impl PriceInput {
    /// Validates the input and returns the price it denotes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotWholeNumber`] for fractional, non-finite,
    /// or non-numeric input and for integer text outside the `i64` range, and
    /// [`ValidationError::Negative`] for values below zero.
    pub fn to_price(&self) -> Result<u64, ValidationError> {
        let whole = match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) => float_to_whole(*value),
            Self::Text(text) => text.trim().parse::<i64>().ok(),
        }
        .ok_or_else(|| ValidationError::NotWholeNumber {
            input: self.to_string(),
        })?;

        u64::try_from(whole).map_err(|_| ValidationError::Negative {
            input: self.to_string(),
        })
    }
}

impl fmt::Display for PriceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for PriceInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for PriceInput {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for PriceInput {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Returns the integer value of a whole, in-range float.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_whole(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// A sellable product link.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The unique identifier of the link
/// - `currency` - The currency the price is expressed in
/// - `short_url` - The public short URL
///
/// ## Trackable Fields
/// - `name`, `url`, `description` - Set with their `set_*` methods
/// - `price` - Set with [`set_price`](Self::set_price), which validates it
///
/// A link built from server data starts clean. Every setter marks its field
/// dirty, and [`save`](Self::save) sends exactly the dirty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    id: Option<String>,
    currency: Option<String>,
    short_url: Option<String>,
    name: Option<String>,
    url: Option<String>,
    description: Option<String>,
    price: Option<u64>,
    dirty: DirtySet<LinkField>,
}

impl Link {
    /// Creates an empty, clean link with no id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists every link.
    ///
    /// # Errors
    ///
    /// Same as [`RestResource::all`].
    pub async fn find_all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        <Self as RestResource>::all(client).await
    }

    /// Returns the link's id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns the public short URL.
    #[must_use]
    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the delivered URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> Option<u64> {
        self.price
    }

    /// Sets the name and marks it dirty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
        self.dirty.mark(LinkField::Name);
    }

    /// Sets the delivered URL and marks it dirty.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
        self.dirty.mark(LinkField::Url);
    }

    /// Sets the description and marks it dirty.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
        self.dirty.mark(LinkField::Description);
    }

    /// Validates and sets the price, marking it dirty.
    ///
    /// On failure the link is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotWholeNumber`] if the input is not a
    /// whole number, or [`ValidationError::Negative`] if it is below zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gumroad_api::rest::resources::Link;
    ///
    /// let mut link = Link::new();
    /// link.set_price(10.0).unwrap();
    /// assert_eq!(link.price(), Some(10));
    ///
    /// let error = link.set_price(10.5).unwrap_err();
    /// assert_eq!(error.to_string(), "Invalid price 10.5: must be whole-number integer");
    /// assert_eq!(link.price(), Some(10));
    /// ```
    pub fn set_price(&mut self, price: impl Into<PriceInput>) -> Result<(), ValidationError> {
        let price = price.into().to_price()?;
        self.price = Some(price);
        self.dirty.mark(LinkField::Price);
        Ok(())
    }

    /// Repopulates the link from trusted server data and marks it clean.
    ///
    /// Known keys are assigned without validation or dirty-marking; keys that
    /// are absent keep their current value and unknown keys are ignored.
    pub fn load(&mut self, attributes: &Map<String, Value>) {
        for (key, value) in attributes {
            match key.as_str() {
                "id" => self.id = text_value(value),
                "currency" => self.currency = text_value(value),
                "short_url" => self.short_url = text_value(value),
                "name" => self.name = text_value(value),
                "url" => self.url = text_value(value),
                "description" => self.description = text_value(value),
                "price" => self.price = price_value(value),
                _ => {}
            }
        }
        self.mark_clean();
    }

    /// Returns the form parameters a save would send: one entry per dirty
    /// field, with the price as a decimal string.
    #[must_use]
    pub fn dirty_params(&self) -> FormParams {
        self.dirty
            .iter()
            .map(|field| {
                let value = match field {
                    LinkField::Name => self.name.clone(),
                    LinkField::Url => self.url.clone(),
                    LinkField::Description => self.description.clone(),
                    LinkField::Price => self.price.map(|price| price.to_string()),
                };
                (field.name().to_string(), value.unwrap_or_default())
            })
            .collect()
    }

    /// Sends the dirty fields to the server.
    ///
    /// A clean link makes no request. Otherwise exactly the dirty fields are
    /// PUT to the link's path, the link is reloaded from the returned
    /// resource object (if any), and it becomes clean.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the link is dirty
    /// but has no id, or the request's error otherwise. On error the dirty
    /// set is kept.
    pub async fn save(&mut self, client: &RestClient) -> Result<&mut Self, ResourceError> {
        if !self.has_changes() {
            return Ok(self);
        }

        let ids: Vec<(&str, &str)> = self.id.as_deref().map(|id| ("id", id)).into_iter().collect();
        let (method, path) = Self::resolve_path(ResourceOperation::Update, &ids)?;

        tracing::debug!(
            "Saving {} dirty field(s) of {}: {:?}",
            self.dirty.len(),
            Self::NAME,
            self.dirty.names()
        );

        let response = client
            .request(method, &path, Some(self.dirty_params()))
            .await?;

        if let Some(attributes) = response.field(Self::KEY).and_then(Value::as_object) {
            self.load(attributes);
        }
        self.mark_clean();

        Ok(self)
    }

    /// Deletes this link on the server. The in-memory link is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the link has no id,
    /// or the request's error otherwise.
    pub async fn destroy(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self
            .id
            .as_deref()
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: ResourceOperation::Delete.as_str(),
            })?;

        Self::destroy_by_id(client, id).await
    }
}

impl RestResource for Link {
    const NAME: &'static str = "Link";
    const KEY: &'static str = "link";
    const PLURAL: &'static str = "links";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "links"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "links"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "links/{id}"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "links/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "links/{id}",
        ),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn from_attributes(attributes: &Map<String, Value>) -> Self {
        let mut link = Self::new();
        link.load(attributes);
        link
    }
}

impl DirtyTracking for Link {
    type Field = LinkField;

    fn dirty_set(&self) -> &DirtySet<LinkField> {
        &self.dirty
    }

    fn dirty_set_mut(&mut self) -> &mut DirtySet<LinkField> {
        &mut self.dirty
    }
}

// Verify Link is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Link>();
    assert_send_sync::<PriceInput>();
};

/// Reads a string field; numbers are kept in their decimal form.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reads a price from server data.
fn price_value(value: &Value) -> Option<u64> {
    let price = value
        .as_u64()
        .or_else(|| value.as_f64().and_then(float_to_whole).and_then(|p| u64::try_from(p).ok()));

    if price.is_none() && !value.is_null() {
        tracing::warn!("Ignoring unusable Link price from server: {value}");
    }
    price
}
