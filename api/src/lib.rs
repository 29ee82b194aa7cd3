pub mod album;
pub mod catalog;
pub mod config;
pub mod generation;
pub mod search;

use serde::{Deserialize, Deserializer};

// the catalog fills in null for anything it doesn't know, so these collapse null (and the
// empty strings it sometimes sends instead) into the "absent" value for the field
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

// years come through as 1959 from some catalogs and "1959" from others; anything that
// isn't a positive year is unknown
pub(crate) fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    let year = match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Number(n)) => i32::try_from(n).ok(),
        Some(Year::Text(s)) => s.trim().parse().ok(),
        None => None,
    };

    Ok(year.filter(|y| *y > 0))
}
