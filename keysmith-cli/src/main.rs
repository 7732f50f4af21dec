use clap::Parser;
use keysmith_cli::cli::KeysmithArgs;
use keysmith_cli::cli::LogOutputFormat;
use keysmith_cli::config::Settings;

fn main() -> anyhow::Result<()> {
    // Parse the command line arguments.
    let args = KeysmithArgs::parse();

    // Configure the binary's stderr output based on the provided output format.
    let pretty = matches!(args.output_format, Some(LogOutputFormat::Pretty));
    keysmith_cli::logging::setup_logging("info,keysmith=debug", pretty);

    // Load the configuration file and/or environment variables.
    let settings = Settings::new(args.config.as_ref())?;
    let codec = settings.codec.build_codec()?;

    tracing::debug!(
        alphabet = %codec.alphabet(),
        size = %codec.size(),
        total = codec.total(),
        "loaded codec configuration"
    );

    args.command.run(&codec, std::io::stdout().lock())
}
