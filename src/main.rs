use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use picokey_phy::constants::{DEFAULT_CONFIG_FILE, PHY_USB_PRODUCT_DISPLAY_LEN};
use picokey_phy::logging::log_warn;
use picokey_phy::util::hex::{decode_hex, encode_hex, format_vid_pid, parse_vid_pid};
use picokey_phy::vendors::all_vendors;
use picokey_phy::{
    decode, encode, init_logger, log_info, resolve_vendor, LedDriver, PhyConfigFile, PhyCurves,
    PhyData, PhyError,
};

#[derive(Parser)]
#[command(name = "picokey-phy")]
#[command(about = "Build, encode and decode PicoKey PHY configuration data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known vendor identities
    Vendors,
    /// Decode a hex dump of PHY data
    Decode { hex: String },
    /// Encode a JSON commissioning file
    Encode { file: PathBuf },
    /// Build PHY data from options
    Build(BuildArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Start from a decoded hex dump instead of an empty config
    #[arg(long)]
    from: Option<String>,
    /// Known vendor name (see `vendors`)
    #[arg(long, conflicts_with = "vidpid")]
    vendor: Option<String>,
    /// Custom VID:PID in hex, e.g. 20a0:42b1
    #[arg(long)]
    vidpid: Option<String>,
    #[arg(long)]
    led_gpio: Option<u8>,
    #[arg(long)]
    led_brightness: Option<u8>,
    /// One of PICO, PIMORONI, WS2812, CYW43, NEOPIXEL, NONE
    #[arg(long)]
    led_driver: Option<String>,
    #[arg(long)]
    dimmable: Option<bool>,
    #[arg(long)]
    led_steady: Option<bool>,
    #[arg(long)]
    power_cycle_reset: Option<bool>,
    /// Seconds, 0 disables the presence check
    #[arg(long)]
    presence_timeout: Option<u8>,
    #[arg(long)]
    product: Option<String>,
    #[arg(long)]
    secp256k1: Option<bool>,
    /// Save the result as JSON
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CONFIG_FILE)]
    save: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vendors => {
            for vendor in all_vendors() {
                println!("{:<16} {}", vendor.name, format_vid_pid(vendor.vid, vendor.pid));
            }
        }
        Commands::Decode { hex } => {
            let raw = decode_hex(&hex).context("Reading PHY hex dump")?;
            let phy = decode(&raw);
            print!("{phy}");
            println!("{}", PhyConfigFile::from_phy(&phy).to_json()?);
        }
        Commands::Encode { file } => {
            let cfg = PhyConfigFile::load(&file)
                .with_context(|| format!("Loading {}", file.display()))?;
            log_info(&format!("Loaded configuration from {}", file.display()));
            let phy = cfg.to_phy();
            print!("{phy}");
            println!("{}", encode_hex(&encode(&phy)));
        }
        Commands::Build(args) => {
            let phy = build(&args)?;
            print!("{phy}");
            println!("{}", encode_hex(&encode(&phy)));
            if let Some(path) = args.save {
                PhyConfigFile::from_phy(&phy)
                    .save(&path)
                    .with_context(|| format!("Saving {}", path.display()))?;
                log_info(&format!("Configuration saved to {}", path.display()));
            }
        }
    }

    Ok(())
}

fn build(args: &BuildArgs) -> Result<PhyData> {
    let mut phy = match args.from.as_deref() {
        Some(hex) => decode(&decode_hex(hex).context("Reading --from hex dump")?),
        None => PhyData::new(),
    };

    if let Some(name) = args.vendor.as_deref() {
        phy.set_vid_pid_from_vendor(resolve_vendor(name)?);
    }
    if let Some(vidpid) = args.vidpid.as_deref() {
        let (vid, pid) = parse_vid_pid(vidpid)?;
        phy.set_vid_pid(vid, pid);
    }

    let driver = match args.led_driver.as_deref() {
        Some(name) => match LedDriver::from_name(name) {
            Some(driver) => Some(driver),
            None => bail!(PhyError::UnknownLedDriver(name.to_string())),
        },
        None => None,
    };
    phy.set_led(args.led_gpio, args.led_brightness, driver);

    if let Some(dimmable) = args.dimmable {
        phy.set_led_dimmable(dimmable);
    }
    if let Some(steady) = args.led_steady {
        phy.set_led_steady(steady);
    }
    if let Some(power_cycle) = args.power_cycle_reset {
        phy.set_power_reset_disabled(!power_cycle);
    }
    if let Some(timeout) = args.presence_timeout {
        phy.set_presence_timeout(timeout);
    }
    if let Some(enabled) = args.secp256k1 {
        phy.set_curve(PhyCurves::SECP256K1, enabled);
    }
    if let Some(product) = args.product.as_deref() {
        let product = if product.chars().count() > PHY_USB_PRODUCT_DISPLAY_LEN {
            log_warn(&format!(
                "Product name truncated to {PHY_USB_PRODUCT_DISPLAY_LEN} characters"
            ));
            product.chars().take(PHY_USB_PRODUCT_DISPLAY_LEN).collect()
        } else {
            product.to_string()
        };
        phy.set_usb_product(product);
    }

    Ok(phy)
}
