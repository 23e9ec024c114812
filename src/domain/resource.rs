//! ResourceKind - Table Resources and Their Endpoints

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The backend collections a table can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Printers,
    Models,
    Printings,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Printers,
        ResourceKind::Models,
        ResourceKind::Printings,
    ];

    /// REST collection path
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Printers => "/printers/",
            ResourceKind::Models => "/models/",
            ResourceKind::Printings => "/printings/",
        }
    }

    /// Short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Printers => "printers",
            ResourceKind::Models => "models",
            ResourceKind::Printings => "printings",
        }
    }

    /// Conventional table id for views (`printers-table`, ...)
    pub fn table_id(&self) -> String {
        format!("{}-table", self.as_str())
    }

    /// Resolve a table id or resource name.
    ///
    /// Accepts both `printers-table` and `printers`.
    pub fn from_table_id(table_id: &str) -> Result<Self> {
        let name = table_id.strip_suffix("-table").unwrap_or(table_id);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| Error::config(format!("Unknown table: {table_id}")))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_table_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_table_ids_and_names() {
        assert_eq!(
            ResourceKind::from_table_id("printers-table").expect("printers"),
            ResourceKind::Printers
        );
        assert_eq!(
            ResourceKind::from_table_id("printings").expect("printings"),
            ResourceKind::Printings
        );
        assert_eq!(ResourceKind::Models.endpoint(), "/models/");
    }

    #[test]
    fn unknown_table_is_config_error() {
        let err = ResourceKind::from_table_id("spools-table").expect_err("unknown");
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn table_id_round_trips() {
        for kind in ResourceKind::ALL {
            assert_eq!(
                ResourceKind::from_table_id(&kind.table_id()).expect("kind"),
                kind
            );
        }
    }
}
