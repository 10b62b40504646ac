use reqwest::{Client, Method, StatusCode};
use thiserror::Error;

pub mod github;

pub use github::{Release, ReleaseAsset};

/// Releases of Biscuit, newest first. The list is never re-sorted locally.
pub const RELEASES_URL: &str =
    "https://api.github.com/repos/Macquarie-MEG-Research/Biscuit/releases";

// allow unauthenticated api requests to github.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:136.0) Gecko/20100101 Firefox/136.0";

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("no releases have been published")]
    EmptyReleaseList,
    #[error("the latest release has no assets attached")]
    NoAssets,
    #[error("no release asset at position {index}")]
    MissingAsset { index: usize },
    #[error("api request failed")]
    Fetch(#[from] reqwest::Error),
    #[error("got {status} on api request: {body}")]
    Status { status: StatusCode, body: String },
}

pub fn get_error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .rev()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" => ")
}

/// A text slot whose displayed content the fetcher replaces.
///
/// Each slot is written exactly once per successful fetch; on any failure
/// every slot keeps its previous content.
pub trait OutputSlot {
    fn set_text(&mut self, text: &str);
}

impl OutputSlot for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// The two install-link slots of the download page.
pub struct VersionSlots<'a> {
    pub complete_link: &'a mut dyn OutputSlot,
    pub standard_link: &'a mut dyn OutputSlot,
}

/// The two `pip install` command slots of the extended download page.
pub struct CommandSlots<'a> {
    pub download_command_complete: &'a mut dyn OutputSlot,
    pub download_command_standard: &'a mut dyn OutputSlot,
}

pub async fn get_releases(client: &Client) -> Result<Vec<Release>, VersionError> {
    let request = client
        .request(Method::GET, RELEASES_URL)
        .header("Accept", "application/vnd.github+json")
        .header("X-GitHub-Api-Version", "2022-11-28")
        .header("User-Agent", USER_AGENT)
        .build()?;

    let resp = client.execute(request).await?;
    match resp.status() {
        StatusCode::OK => Ok(resp.json().await?),
        status => Err(VersionError::Status {
            status,
            body: resp.text().await.map_or_else(
                |_| "no text could be parsed".to_string(),
                |t| t.trim().to_string(),
            ),
        }),
    }
}

/// The most recent release is the first entry in the list.
pub fn latest_release(releases: Vec<Release>) -> Result<Release, VersionError> {
    releases
        .into_iter()
        .next()
        .ok_or(VersionError::EmptyReleaseList)
}

/// Writes the two install labels. A release without assets has nothing to
/// link to, so the slots are left untouched.
pub fn display_version(
    release: &Release,
    slots: &mut VersionSlots<'_>,
) -> Result<(), VersionError> {
    if release.assets.is_empty() {
        return Err(VersionError::NoAssets);
    }

    let version = &release.tag_name;
    slots
        .complete_link
        .set_text(&format!("Complete install ({version})"));
    slots
        .standard_link
        .set_text(&format!("Standard install ({version})"));

    Ok(())
}

/// Writes the two `pip install` commands.
///
/// Asset 0 is the standard wheel and asset 1 the complete wheel; that order
/// is a convention of the upstream publish process. Both positions are
/// resolved before any slot is written.
pub fn display_download_commands(
    release: &Release,
    slots: &mut CommandSlots<'_>,
) -> Result<(), VersionError> {
    if release.assets.is_empty() {
        return Err(VersionError::NoAssets);
    }

    let standard = release
        .assets
        .first()
        .ok_or(VersionError::MissingAsset { index: 0 })?;
    let complete = release
        .assets
        .get(1)
        .ok_or(VersionError::MissingAsset { index: 1 })?;

    slots
        .download_command_standard
        .set_text(&format!("pip install -U {}", standard.browser_download_url));
    slots
        .download_command_complete
        .set_text(&format!("pip install -U {}", complete.browser_download_url));

    Ok(())
}

/// Fetches the release list once and fills in the install-link slots.
pub async fn fetch_and_display(
    client: &Client,
    slots: &mut VersionSlots<'_>,
) -> Result<(), VersionError> {
    let release = latest_release(get_releases(client).await?)?;
    display_version(&release, slots)
}

/// Extended variant: install labels plus `pip install` commands.
///
/// Commands go first since they validate both asset positions, so a
/// partially-published release leaves all four slots untouched.
pub async fn fetch_and_display_extended(
    client: &Client,
    version_slots: &mut VersionSlots<'_>,
    command_slots: &mut CommandSlots<'_>,
) -> Result<(), VersionError> {
    let release = latest_release(get_releases(client).await?)?;
    display_download_commands(&release, command_slots)?;
    display_version(&release, version_slots)
}
