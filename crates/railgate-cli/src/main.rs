mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::EXIT_FAILURE;
use railgate_schema::{
    parse_policy_file, CompositionPolicy, GatewayPolicy, SwitchDirection, SwitchOutcome,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "railgate",
    version,
    about = "Capability-gated railway switch gateway"
)]
struct Cli {
    /// Path to a gateway policy TOML file (defaults apply when omitted).
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Directions accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Left,
    Right,
}

impl From<DirectionArg> for SwitchDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => Self::Left,
            DirectionArg::Right => Self::Right,
        }
    }
}

/// Scripted trust verdict for the simulated trust checker.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrustArg {
    Trusted,
    CrlUnreachable,
    Expired,
    NotYetValid,
    Revoked,
    Untrusted,
}

/// Scripted outcome for the simulated switch hardware.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SwitchArg {
    Success,
    Stiff,
    TooShort,
    Unknown,
}

impl From<SwitchArg> for SwitchOutcome {
    fn from(arg: SwitchArg) -> Self {
        match arg {
            SwitchArg::Success => Self::Success,
            SwitchArg::Stiff => Self::Stiff,
            SwitchArg::TooShort => Self::TooShort,
            SwitchArg::Unknown => Self::UnknownError,
        }
    }
}

// The trust, signal, and hardware devices are simulated until real
// adapters exist; the --trust/--operator/--arrival-seconds/--switch flags
// script them deterministically.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Request the switch to be set to a direction.
    Set {
        /// Operator credential reference (e.g. a certificate path).
        credential: String,
        /// Requested switch direction.
        #[arg(long, value_enum, default_value_t = DirectionArg::Left)]
        direction: DirectionArg,
        /// Run the operator and track checks to completion and report
        /// their failures together instead of stopping at the first.
        #[arg(long, default_value_t = false)]
        aggregate: bool,
        /// Simulated trust verdict for the credential.
        #[arg(long, value_enum, default_value_t = TrustArg::Trusted)]
        trust: TrustArg,
        /// Simulated subject name embedded in the credential.
        #[arg(long, default_value = "CN=Signal Operator")]
        operator: String,
        /// Simulated seconds until the next train reaches the segment.
        #[arg(long, default_value_t = 45)]
        arrival_seconds: i64,
        /// Simulated mechanical outcome of the actuation.
        #[arg(long, value_enum, default_value_t = SwitchArg::Success)]
        switch: SwitchArg,
    },
    /// Verify an operator credential without touching the switch.
    Verify {
        /// Operator credential reference.
        credential: String,
        /// Simulated trust verdict for the credential.
        #[arg(long, value_enum, default_value_t = TrustArg::Trusted)]
        trust: TrustArg,
        /// Simulated subject name embedded in the credential.
        #[arg(long, default_value = "CN=Signal Operator")]
        operator: String,
    },
    /// Check track occupancy without touching the switch.
    Check {
        /// Simulated seconds until the next train reaches the segment.
        #[arg(long, default_value_t = 45)]
        arrival_seconds: i64,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RAILGATE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let policy = match load_policy(cli.policy.as_deref()) {
        Ok(policy) => policy,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let json_output = cli.json;

    let result = match cli.command {
        Commands::Set {
            credential,
            direction,
            aggregate,
            trust,
            operator,
            arrival_seconds,
            switch,
        } => {
            let policy = GatewayPolicy {
                composition: if aggregate {
                    CompositionPolicy::Aggregate
                } else {
                    policy.composition
                },
                ..policy
            };
            commands::set::run(
                &policy,
                &credential,
                direction.into(),
                commands::set::SimulatedDevices {
                    trust: build_trust(trust, &operator),
                    arrival_seconds,
                    outcome: switch.into(),
                },
                json_output,
            )
        }
        Commands::Verify {
            credential,
            trust,
            operator,
        } => commands::verify::run(&credential, &build_trust(trust, &operator), json_output),
        Commands::Check { arrival_seconds } => {
            commands::check::run(&policy, arrival_seconds, json_output)
        }
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn load_policy(path: Option<&std::path::Path>) -> Result<GatewayPolicy, String> {
    match path {
        Some(path) => parse_policy_file(path).map_err(|e| e.to_string()),
        None => Ok(GatewayPolicy::default()),
    }
}

fn build_trust(arg: TrustArg, operator: &str) -> railgate_devices::mock::MockTrust {
    use railgate_devices::mock::MockTrust;
    match arg {
        TrustArg::Trusted => MockTrust::trusted(operator),
        TrustArg::CrlUnreachable => MockTrust::crl_unreachable(),
        TrustArg::Expired => MockTrust::expired(),
        TrustArg::NotYetValid => MockTrust::not_yet_valid(),
        TrustArg::Revoked => MockTrust::revoked(),
        TrustArg::Untrusted => MockTrust::untrusted(),
    }
}
