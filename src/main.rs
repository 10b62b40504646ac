use std::{
    io::{stdout, Write},
    process::exit,
};

use biscuit_version::{
    fetch_and_display_extended, get_error_chain, CommandSlots, VersionError, VersionSlots,
};
use reqwest::Client;
use tokio::runtime;

async fn inner_main() -> anyhow::Result<()> {
    let client = Client::new();

    let mut complete_link = String::new();
    let mut standard_link = String::new();
    let mut download_command_complete = String::new();
    let mut download_command_standard = String::new();

    let result = fetch_and_display_extended(
        &client,
        &mut VersionSlots {
            complete_link: &mut complete_link,
            standard_link: &mut standard_link,
        },
        &mut CommandSlots {
            download_command_complete: &mut download_command_complete,
            download_command_standard: &mut download_command_standard,
        },
    )
    .await;

    match result {
        Ok(()) => {
            let mut stdout = stdout().lock();
            writeln!(stdout, "{complete_link}")?;
            writeln!(stdout, "{standard_link}")?;
            writeln!(stdout, "{download_command_complete}")?;
            writeln!(stdout, "{download_command_standard}")?;
        }
        // the alert the download page shows when a release has no wheels.
        Err(VersionError::NoAssets) => {
            eprintln!("Something went wrong! Please raise an issue on GitHub!");
            exit(1);
        }
        Err(err) => {
            println!("failed to fetch the latest release!");
            println!("errors: {}", get_error_chain(&anyhow::Error::new(err)));
            exit(1);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let rt = runtime::Builder::new_current_thread()
        .enable_io()
        .enable_time()
        .build()?;

    rt.block_on(inner_main())
}
