use clap::Parser;

mod config;
mod transport;

#[derive(Parser)]
#[command(version, propagate_version = true)]
#[command(about = "Navlink GNSS daemon", long_about = None)]
struct Args {
    /// Serial device.
    device: std::path::PathBuf,
    /// Serial baud rate.
    #[arg(long, default_value_t = 115_200)]
    baud_rate: u32,
    /// Fix poll interval in seconds.
    #[arg(long, default_value_t = 10)]
    interval: u64,
    /// Daemonize the service.
    #[arg(long)]
    daemon: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let bin_name = env!("CARGO_BIN_NAME");

    let mut config = config::GnssConfig {
        device: args.device,
        baud_rate: args.baud_rate,
        interval: args.interval,
        global: navlink::GlobalConfig::default(),
    };

    config.global.bin_name = bin_name.to_string();
    config.global.daemon = args.daemon;

    let mut log_config = simplelog::ConfigBuilder::new();
    if args.daemon {
        log_config.set_time_level(log::LevelFilter::Off);
        log_config.set_thread_level(log::LevelFilter::Off);
    } else {
        log_config.set_time_offset_to_local().ok();
        log_config.set_time_format_rfc2822();
    }

    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);
    log_config.add_filter_ignore_str("mio");

    let log_level = if args.daemon {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let color_choice = if args.daemon {
        simplelog::ColorChoice::Never
    } else {
        simplelog::ColorChoice::Auto
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        color_choice,
    )?;

    if args.daemon {
        log::debug!("Running service as daemon");
    }

    log::trace!("{:#?}", config);

    daemonize(&config).await
}

async fn daemonize(config: &config::GnssConfig) -> anyhow::Result<()> {
    use navlink::driver::SimcomGnss;

    log::info!("Starting GNSS service");

    let serial = transport::SerialTransport::open(&config.device, config.baud_rate)?;
    let mut receiver = SimcomGnss::new(serial);

    receiver.enable()?;
    log::info!("GNSS engine powered on");

    let mut interval = tokio::time::interval(std::time::Duration::from_secs(config.interval));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match receiver.query_fix() {
                    Ok(Some(fix)) => log::info!("{}", fix),
                    Ok(None) => log::debug!("No fix data available"),
                    Err(e) => log::error!("Failed to query fix: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    receiver.disable()?;
    log::info!("GNSS engine powered off");

    Ok(())
}
