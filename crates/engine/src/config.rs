/// How group results are compared when reducing them to one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Compare the largest and smallest group results.
    #[default]
    BetweenGroups,
    /// Compare each group result to the overall result.
    ToOverall,
}

/// Configuration for derived metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub method: Method,
}

impl Config {
    /// Returns a configuration using `method`.
    #[must_use]
    pub fn with_method(method: Method) -> Self {
        Self { method }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_compares_between_groups() {
        assert_eq!(Config::default().method, Method::BetweenGroups);
        assert_eq!(
            Config::with_method(Method::ToOverall).method,
            Method::ToOverall
        );
    }
}
