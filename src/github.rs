use serde::Deserialize;

/// A release's asset. Does not contain all fields.
///
/// Assets have positional identity only: the upstream publish process
/// uploads the standard wheel first and the complete wheel second.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub browser_download_url: String,
}

/// A github release. Does not contain all fields.
///
/// See the github [docs](https://docs.github.com/en/rest/releases/releases?apiVersion=2022-11-28#list-releases) for more information
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub assets: Vec<ReleaseAsset>,
}
