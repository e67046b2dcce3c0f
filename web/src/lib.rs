use clap::{Parser, ValueEnum};
use valentine_core::{EntryPolicy, FlowConfig, FlowVariant};
use wasm_bindgen::prelude::*;

mod app;
mod pages;
mod timers;
mod utils;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum VariantArg {
    Full,
    Simplified,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum PolicyArg {
    Relaxed,
    Immediate,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for the flower cover instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Who the whole thing is for
    #[arg(short, long, default_value = FlowConfig::DEFAULT_RECIPIENT)]
    name: String,

    /// Route taken after the puzzle
    #[arg(long, value_enum, default_value_t = VariantArg::Full)]
    variant: VariantArg,

    /// Puzzle entry feedback
    #[arg(long, value_enum, default_value_t = PolicyArg::Relaxed)]
    policy: PolicyArg,

    /// Delay between an entry and the completion check
    #[arg(long, default_value_t = FlowConfig::DEFAULT_CHECK_DEBOUNCE_MS)]
    debounce_ms: u32,

    /// Score the timed puzzle starts from
    #[arg(long, default_value_t = 0)]
    score_base: u32,
}

impl Args {
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            recipient: self.name.clone(),
            variant: match self.variant {
                VariantArg::Full => FlowVariant::Full,
                VariantArg::Simplified => FlowVariant::Simplified,
            },
            policy: match self.policy {
                PolicyArg::Relaxed => EntryPolicy::Relaxed,
                PolicyArg::Immediate => EntryPolicy::Immediate,
            },
            check_debounce_ms: self.debounce_ms,
            score_base: self.score_base,
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, arg_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (
            Args::from_hash("").expect("default args must parse"),
            Some(err),
        ),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = arg_error {
        log::warn!("ignoring url arguments: {}", err);
    }

    let config = args.flow_config();
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("config: {:?}, seed: {}", config, seed);

    let root = document()
        .get_element_by_id("app")
        .expect("Could not find id=\"app\" element");

    log::debug!("App started");
    yew::Renderer::<app::App>::with_root_and_props(root, app::AppProps { config, seed }).render();
}
