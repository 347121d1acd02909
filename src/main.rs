use clap::Parser;
use log::info;
use mandelbrot_explorer::{CliArgs, FrameLoop, PpmFilePresenter, ScriptedInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = CliArgs::parse();
    let config = args.to_config().validate()?;
    info!("{:?}", config);

    let mut input = ScriptedInput::parse(&args.commands)?;
    let mut presenter = PpmFilePresenter::new(&args.output);
    let mut frame_loop = FrameLoop::new(&config);

    frame_loop.run(&mut input, &mut presenter)?;

    let viewport = frame_loop.viewport();
    println!(
        "wrote {} (origin {} {:+}i, extent {}, {} iterations)",
        presenter.path().display(),
        viewport.origin().real,
        viewport.origin().imag,
        viewport.extent(),
        viewport.iteration_limit()
    );

    Ok(())
}
