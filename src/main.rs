use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use desk_scene::app::App;
use desk_scene::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("Desk Scene - Controls: WASD to move, Q/E up/down, mouse to look, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
