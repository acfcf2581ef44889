use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use clap::{Parser, Subcommand};
use cloudutil_core::contact::{Contact, NameOrder, contact_lines};
use cloudutil_core::device::{info_lines, parse_device_dump, summary_line};
use cloudutil_inspect::settings::SavedSettings;
use tracing::{error, warn};

/// Pretty-print JSON dumps captured from the iCloud client (the debug
/// copy-to-clipboard output) without a running session.
#[derive(Parser, Debug)]
#[command(name = "cloudutil-inspect")]
struct InspectArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize devices from a Find My JSON dump.
    Devices {
        path: PathBuf,
        /// Print the full info listing for each device.
        #[arg(long)]
        full: bool,
        /// Anchor "ago" rendering at this unix-millisecond time instead
        /// of the current clock.
        #[arg(long)]
        now_ms: Option<u64>,
    },
    /// List contacts from a contacts JSON dump.
    Contacts {
        path: PathBuf,
        /// "first,last" or "last,first"; remembered for next time.
        #[arg(long)]
        order: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = InspectArgs::parse();
    let result = match args.command {
        Command::Devices { path, full, now_ms } => run_devices(&path, full, now_ms),
        Command::Contacts { path, order } => run_contacts(&path, order.as_deref()),
    };
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run_devices(path: &Path, full: bool, now_ms: Option<u64>) -> Result<(), Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let devices = parse_device_dump(&data)?;
    let now = now_ms.unwrap_or_else(unix_now_ms);
    for (index, device) in devices.iter().enumerate() {
        if full {
            if index > 0 {
                println!();
            }
            for line in info_lines(device, now) {
                println!("{line}");
            }
        } else {
            println!("{}", summary_line(device));
        }
    }
    Ok(())
}

fn run_contacts(path: &Path, order_arg: Option<&str>) -> Result<(), Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let contacts: Vec<Contact> = serde_json::from_str(&data)?;

    let mut saved = SavedSettings::load();
    let order = match order_arg {
        Some(raw) => {
            let order: NameOrder = raw.parse()?;
            saved.order = Some(order.to_string());
            if let Err(err) = saved.save() {
                warn!("could not persist settings: {err}");
            }
            order
        }
        None => saved
            .order
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default(),
    };

    for line in contact_lines(&contacts, order) {
        println!("{line}");
    }
    Ok(())
}

fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
