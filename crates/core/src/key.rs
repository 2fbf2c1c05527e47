use std::fmt;

/// A group identifier that can mix integer, string, and boolean values.
///
/// Equality is structural and never coerces between variants, so
/// `GroupKey::Int(1)` and `GroupKey::Str("1".into())` name different groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Int(value) => write!(f, "{value}"),
            GroupKey::Str(value) => f.write_str(value),
            GroupKey::Bool(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for GroupKey {
                fn from(value: $ty) -> Self {
                    GroupKey::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        GroupKey::Str(value.to_owned())
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        GroupKey::Str(value)
    }
}

impl From<bool> for GroupKey {
    fn from(value: bool) -> Self {
        GroupKey::Bool(value)
    }
}
