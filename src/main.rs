use clap::Parser;
use relm4::prelude::*;
use speed_dial::config;
use speed_dial::gui::app::AppModel;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Write the default config file if it does not exist, print its path and exit
    #[arg(long)]
    write_config: bool,

    /// Initial window width (overrides the config file)
    #[arg(long)]
    width: Option<i32>,

    /// Initial window height (overrides the config file)
    #[arg(long)]
    height: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_or_default();
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    // GTK must not see our own flags
    let app = RelmApp::new("org.speeddial.SpeedDial").with_args(Vec::new());

    app.run::<AppModel>(config);
    Ok(())
}
