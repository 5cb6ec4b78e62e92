use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use trip_cost::{
    sdk::config::TripConfig,
    sdk::routing::GoogleDirectionsProvider,
    sdk::trip::{cost::format_distance, TripForm},
    sdk::util::{log::init_logging, rate_limit},
    sdk::vehicle::{FuelEconomyGovProvider, FuelEconomyProvider, MenuItem},
};

/// Estimate how much gas a road trip will cost
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log this tool's own steps at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the model years known to fueleconomy.gov
    Years,
    /// List the makes for a model year
    Makes {
        #[arg(short, long)]
        year: String,
    },
    /// List the models of a make for a model year
    Models {
        #[arg(short, long)]
        year: String,
        #[arg(short, long)]
        make: String,
    },
    /// Fetch a driving route and estimate its fuel cost
    Estimate(EstimateArgs),
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[arg(long)]
    year: String,

    #[arg(long)]
    make: String,

    #[arg(long)]
    model: String,

    /// Starting address (e.g., "New York, NY")
    #[arg(short, long)]
    origin: String,

    /// Final address (e.g., "Boston, MA")
    #[arg(short, long)]
    destination: String,

    /// Intermediate stop, repeatable, visited in the given order
    #[arg(short, long = "stop")]
    stops: Vec<String>,

    /// Gas price in USD per gallon
    #[arg(short, long)]
    gas_price: String,

    /// [Optional] Index of the alternative route to price
    #[arg(long, default_value_t = 0)]
    route: usize,

    /// Ask for the single best route only
    #[arg(long)]
    no_alternatives: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TripConfig::from_env().context("Invalid configuration")?;
    let vehicles = FuelEconomyGovProvider::new(
        config.fuel_economy_base_url.clone(),
        config.http_timeout,
        rate_limit::fuel_economy_limiter(),
    )
    .context("Failed to build the vehicle service client")?;

    match cli.command {
        Command::Years => print_menu(&vehicles.years().context("Failed to list years")?),
        Command::Makes { year } => {
            print_menu(&vehicles.makes(&year).context("Failed to list makes")?)
        }
        Command::Models { year, make } => print_menu(
            &vehicles
                .models(&year, &make)
                .context("Failed to list models")?,
        ),
        Command::Estimate(args) => estimate(&config, &vehicles, args)?,
    }
    Ok(())
}

fn print_menu(items: &[MenuItem]) {
    for item in items {
        if item.text == item.value {
            println!("{}", item.text);
        } else {
            println!("{}\t{}", item.value, item.text);
        }
    }
}

fn estimate(config: &TripConfig, vehicles: &FuelEconomyGovProvider, args: EstimateArgs) -> Result<()> {
    let api_key = config.require_api_key()?.to_string();
    let directions = GoogleDirectionsProvider::new(
        api_key,
        config.directions_base_url.clone(),
        config.http_timeout,
        rate_limit::directions_limiter(),
    )
    .context("Failed to build the directions client")?;

    let mut form = TripForm::new();

    // --- 1. Vehicle ---
    form.vehicle.choose_year(&args.year, vehicles);
    form.vehicle.choose_make(&args.make, vehicles);
    form.vehicle.choose_model(&args.model, vehicles);
    if !form.vehicle.selection().is_complete() {
        bail!(
            "Year, make and model are all required (got {:?})",
            form.vehicle.selection().describe()
        );
    }
    let mpg = match form.vehicle.fuel_efficiency() {
        Some(mpg) => mpg,
        None => bail!(
            "Could not find the fuel efficiency of {}",
            form.vehicle.selection().describe()
        ),
    };
    log::info!("{} rated at {:.1} MPG", form.vehicle.selection().describe(), mpg);

    // --- 2. Route ---
    form.route.origin = args.origin;
    form.route.destination = args.destination;
    form.route.alternatives = !args.no_alternatives;
    for stop in args.stops {
        form.route.add_stop();
        let index = form.route.stops().len() - 1;
        form.route.update_stop(index, stop);
    }

    // --- 3. Gas price ---
    form.set_gas_price(args.gas_price);
    if let Some(message) = form.gas_price().error_message() {
        bail!(message);
    }

    // --- 4. Calculate ---
    let mut summary = match form.calculate(&directions) {
        Ok(summary) => summary,
        Err(e) => bail!(e.user_message()),
    };
    if args.route > 0 {
        match form.select_route(args.route)? {
            Some(alternative) => summary = alternative,
            None => log::warn!(
                "Route {} does not exist, keeping route 0 of {}",
                args.route,
                form.route.routes().len()
            ),
        }
    }

    // --- 5. Output ---
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if form.route.routes().len() > 1 {
        println!("Routes:");
        let active = form.route.active_index();
        for (i, route) in form.route.routes().iter().enumerate() {
            let marker = if Some(i) == active { "*" } else { " " };
            println!(
                "{} [{}] {} ({} miles, {:.1} h)",
                marker,
                i,
                route.summary,
                format_distance(trip_cost::total_distance_miles(route)),
                route.total_duration_hours()
            );
        }
        println!();
    }
    println!("{}", summary);
    Ok(())
}
