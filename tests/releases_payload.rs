//! Drives the projection pipeline from a realistic github releases payload,
//! including the extra fields the api returns that the crate ignores.

use biscuit_version::{
    display_download_commands, display_version, latest_release, CommandSlots, Release,
    VersionSlots,
};

const PAYLOAD: &str = r#"
[
  {
    "url": "https://api.github.com/repos/Macquarie-MEG-Research/Biscuit/releases/2",
    "id": 2,
    "tag_name": "v0.9.1",
    "name": "Biscuit v0.9.1",
    "draft": false,
    "prerelease": false,
    "assets": [
      {
        "id": 21,
        "name": "Biscuit-0.9.1-py3-none-any.whl",
        "content_type": "application/octet-stream",
        "size": 104832,
        "browser_download_url": "https://x/a.whl"
      },
      {
        "id": 22,
        "name": "Biscuit-complete-0.9.1-py3-none-any.whl",
        "content_type": "application/octet-stream",
        "size": 3145728,
        "browser_download_url": "https://x/b.whl"
      }
    ]
  },
  {
    "url": "https://api.github.com/repos/Macquarie-MEG-Research/Biscuit/releases/1",
    "id": 1,
    "tag_name": "v0.9.0",
    "name": "Biscuit v0.9.0",
    "draft": false,
    "prerelease": false,
    "assets": []
  }
]
"#;

#[test]
fn payload_fills_all_four_slots() {
    let releases: Vec<Release> = serde_json::from_str(PAYLOAD).unwrap();
    let release = latest_release(releases).unwrap();

    let mut complete_link = String::new();
    let mut standard_link = String::new();
    let mut command_complete = String::new();
    let mut command_standard = String::new();

    display_download_commands(
        &release,
        &mut CommandSlots {
            download_command_complete: &mut command_complete,
            download_command_standard: &mut command_standard,
        },
    )
    .unwrap();
    display_version(
        &release,
        &mut VersionSlots {
            complete_link: &mut complete_link,
            standard_link: &mut standard_link,
        },
    )
    .unwrap();

    assert_eq!(complete_link, "Complete install (v0.9.1)");
    assert_eq!(standard_link, "Standard install (v0.9.1)");
    assert_eq!(command_complete, "pip install -U https://x/b.whl");
    assert_eq!(command_standard, "pip install -U https://x/a.whl");
}

#[test]
fn older_releases_are_ignored() {
    let releases: Vec<Release> = serde_json::from_str(PAYLOAD).unwrap();
    let release = latest_release(releases).unwrap();

    // the v0.9.0 entry has no assets, but only the newest entry matters.
    assert_eq!(release.tag_name, "v0.9.1");
    assert_eq!(release.assets.len(), 2);
}
