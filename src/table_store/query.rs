/// Query parameters for a rows listing.
///
/// Filters follow the table store's `filter__<field>__<operator>=<value>`
/// convention and are percent-encoded when the request URL is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    pairs: Vec<(String, String)>,
}

impl RowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// `filter__<field>__equal=<value>`
    pub fn filter_equal(self, field: &str, value: impl ToString) -> Self {
        self.param(format!("filter__{field}__equal"), value)
    }

    /// `filter__<field>__contains=<value>`. For link-row fields the store
    /// matches on the linked rows' text, so callers still need to check
    /// ownership on the returned rows.
    pub fn filter_contains(self, field: &str, value: impl ToString) -> Self {
        self.param(format!("filter__{field}__contains"), value)
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl std::fmt::Display for RowQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        write!(f, "?{joined}")
    }
}
