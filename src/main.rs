use taskdeck::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
