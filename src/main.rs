use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use seedlock::cli::{
    handle_check_password, handle_check_phrase, handle_decrypt_command, handle_encrypt_command,
    DecryptArgs, EncryptArgs, Session, TerminalPrompt,
};
use seedlock::config::{SeedlockPaths, Settings};
use seedlock::crypto::SecureString;
use seedlock::logging;
use seedlock::transport::{PayloadCodec, TextPayloadCodec};

#[derive(Parser)]
#[command(
    name = "seedlock",
    version,
    about = "Password-protected, QR-ready encryption for BIP-39 seed phrases",
    long_about = "seedlock encrypts a BIP-39 seed phrase under a password into a short \
                  Base64 payload that can be printed as a QR code, and recovers the \
                  phrase from that payload later. Run without a command for the \
                  interactive menu. Set SEEDLOCK_PASSWORD to supply the password \
                  without a prompt."
)]
struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Password to use instead of prompting. Visible in process listings, so
    /// hidden from help; scripts should set SEEDLOCK_PASSWORD instead.
    #[arg(
        long,
        env = "SEEDLOCK_PASSWORD",
        hide = true,
        hide_env_values = true,
        global = true
    )]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a seed phrase read from standard input
    Encrypt(EncryptArgs),

    /// Recover a seed phrase from a payload
    Decrypt(DecryptArgs),

    /// Check a password against the strength rules
    CheckPassword,

    /// Check a seed phrase read from standard input
    CheckPhrase,

    /// Launch the interactive menu
    #[command(alias = "menu")]
    Interactive,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SeedlockPaths::new();
    let (settings, settings_error) = match &paths {
        Ok(paths) => {
            let (settings, err) = Settings::load_or_default(paths);
            (settings, err.map(|e| e.to_string()))
        }
        Err(e) => (Settings::default(), Some(e.to_string())),
    };
    logging::init(&logging::filter_directive(cli.verbose, &settings.log_filter));
    if let Some(e) = settings_error {
        warn!(error = %e, "using default settings");
    }

    let password = cli.password.map(SecureString::from);
    let codec = TextPayloadCodec;
    let mut prompt = TerminalPrompt;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    match cli.command {
        Some(Commands::Encrypt(args)) => handle_encrypt_command(
            &args,
            password,
            &settings,
            &codec,
            &mut prompt,
            &mut input,
            &mut out,
        )?,
        Some(Commands::Decrypt(args)) => {
            handle_decrypt_command(&args, password, &codec, &mut prompt, &mut input, &mut out)?
        }
        Some(Commands::CheckPassword) => handle_check_password(password, &mut prompt, &mut out)?,
        Some(Commands::CheckPhrase) => handle_check_phrase(&mut input, &mut out)?,
        Some(Commands::Config) => {
            let paths = paths?;
            println!("seedlock Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default output file: {}", settings.default_output_file);
            println!("  Payload extension:   {}", codec.extension());
            println!("  Enforce seed phrase: {}", settings.enforce_seed_phrase);
            println!("  Log filter:          {}", settings.log_filter);
        }
        Some(Commands::Interactive) | None => {
            Session::new(input, out, prompt, &codec, &settings).run()?;
        }
    }

    Ok(())
}
