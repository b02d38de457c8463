//! Output format value object

use serde::{Deserialize, Serialize};

/// How search results are shown
///
/// This is a domain concept shared by the config file and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One card per exhibition
    #[default]
    Cards,
    /// Province and invitation-type charts
    Charts,
    /// The batch as JSON
    Json,
}
