use serde::{Deserialize, Serialize};

use crate::scoring::UserProfile;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub profile: UserProfile,

    /// Directory for `analyze --export` when no explicit path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
}
