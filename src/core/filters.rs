use crate::models::{Client, ClientSearchQuery, ClientStatus, Property, PropertySearchQuery};

/// Property search used by the listings page
///
/// Unset fields do not filter. Price bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub query: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
}

impl PropertyFilter {
    #[inline]
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(query) = non_empty(&self.query) {
            let query = query.to_lowercase();
            let hit = [&property.address, &property.city, &property.state]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
                || property
                    .description
                    .as_ref()
                    .is_some_and(|desc| desc.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }

        if let Some(kind) = non_empty(&self.property_type) {
            if property.property_type != kind {
                return false;
            }
        }

        if self.bedrooms.is_some_and(|beds| property.bedrooms != beds) {
            return false;
        }

        true
    }

    /// Apply the filter, preserving catalog order
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}

impl From<PropertySearchQuery> for PropertyFilter {
    fn from(query: PropertySearchQuery) -> Self {
        Self {
            query: query.q,
            min_price: query.min_price,
            max_price: query.max_price,
            property_type: query.property_type,
            bedrooms: query.bedrooms,
        }
    }
}

/// Client search used by the CRM client list
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub query: Option<String>,
    pub status: Option<ClientStatus>,
}

impl ClientFilter {
    #[inline]
    pub fn matches(&self, client: &Client) -> bool {
        if let Some(query) = non_empty(&self.query) {
            let query = query.to_lowercase();
            if !client.name.to_lowercase().contains(&query)
                && !client.email.to_lowercase().contains(&query)
            {
                return false;
            }
        }

        self.status.map_or(true, |status| client.status == status)
    }

    pub fn apply<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients.iter().filter(|c| self.matches(c)).collect()
    }
}

impl From<ClientSearchQuery> for ClientFilter {
    fn from(query: ClientSearchQuery) -> Self {
        Self {
            query: query.q,
            status: query.status,
        }
    }
}

/// Distinct property types, in first-seen order
pub fn property_types(properties: &[Property]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for property in properties {
        if !types.contains(&property.property_type) {
            types.push(property.property_type.clone());
        }
    }
    types
}

/// Distinct bedroom counts, ascending
pub fn bedroom_options(properties: &[Property]) -> Vec<u32> {
    let mut options: Vec<u32> = properties.iter().map(|p| p.bedrooms).collect();
    options.sort_unstable();
    options.dedup();
    options
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
