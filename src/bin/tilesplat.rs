use clap::*;

use tilesplat::core::base::*;
use tilesplat::core::display::*;
use tilesplat::core::misc::ProgressReporter;
use tilesplat::core::options::RenderOptions;
use tilesplat::core::render::*;
use tilesplat::core::scene::*;
use tilesplat::displays::*;

use log::*;
use std::env;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::thread::available_parallelism;
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// JSON file with render options.
    #[arg(short, long, value_name = "filename")]
    pub config: Option<PathBuf>,

    /// Write the final image to the given filename.
    #[arg(short, long, value_name = "filename")]
    pub outfile: Option<PathBuf>,

    /// Render device: cpu or tiled.
    #[arg(short, long, value_name = "name")]
    pub device: Option<String>,

    /// Number of splats in the generated point cloud.
    #[arg(short, long, value_name = "num", default_value = "100000")]
    pub points: usize,

    /// Seed of the generated point cloud.
    #[arg(long, value_name = "num", default_value = "0")]
    pub seed: u64,

    /// Number of frames to render while orbiting the cloud.
    #[arg(short, long, value_name = "num", default_value = "1")]
    pub frames: u32,

    /// Rotation about the vertical axis between frames.
    #[arg(long, value_name = "degrees", default_value = "6.0")]
    pub degrees_per_frame: Float,

    /// Also write every frame as a numbered PNG into this directory.
    #[arg(long, value_name = "dir")]
    pub frames_dir: Option<PathBuf>,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn load_options(opts: &CommandOptions) -> Result<RenderOptions, SplatError> {
    let mut options = match opts.config.as_ref() {
        Some(path) => RenderOptions::from_json_file(path)?,
        None => RenderOptions::default(),
    };
    if let Some(device) = opts.device.as_ref() {
        options.device = device.clone();
    }
    if let Some(outfile) = opts.outfile.as_ref() {
        options.outfile = outfile.to_string_lossy().into_owned();
    }
    return Ok(options);
}

fn create_sinks(opts: &CommandOptions, options: &RenderOptions) -> MultipleSink {
    let mut sinks = MultipleSink::new();
    sinks.add_sink(Box::new(FinalImageDisplay::new(&PathBuf::from(&options.outfile))));
    if let Some(dir) = opts.frames_dir.as_ref() {
        sinks.add_sink(Box::new(SequentialDisplay::new(dir)));
    }
    return sinks;
}

/// Drains `buffer` into `sinks` until the render loop closes it.
fn consume_frames(
    buffer: &DoubleBuffer<Frame>,
    mut sinks: MultipleSink,
    mut reporter: ProgressReporter,
    resolution: [u32; 2],
) -> Result<(), SplatError> {
    let result = (|| {
        sinks.start("tilesplat", &resolution)?;
        while let Some(frame) = buffer.acquire() {
            sinks.update(&frame)?;
            reporter.update(1);
        }
        sinks.end()
    })();
    if result.is_err() {
        buffer.close();
    }
    reporter.done();
    return result;
}

fn render(opts: &CommandOptions) -> Result<u64, SplatError> {
    let options = load_options(opts)?;

    let mut scene = procedural_cloud(opts.points, opts.seed);
    let bounds = recentre_points(&mut scene.positions)?;
    debug!("Recentred bounds: {}", bounds);
    let gaussians = scene.to_gaussians()?;

    let mut session = RenderSession::new(gaussians, &options)?;
    let resolution = [options.image_width, options.image_height];
    let buffer = DoubleBuffer::new(Frame::new(resolution[0], resolution[1]));
    let sinks = create_sinks(opts, &options);
    let reporter = if opts.quiet {
        ProgressReporter::hidden(opts.frames as usize)
    } else {
        ProgressReporter::new(opts.frames as usize, &options.outfile)
    };

    let mut control = if opts.frames > 1 {
        Some(ScriptedControl::orbit(
            &session.initial_state(),
            opts.frames,
            opts.degrees_per_frame,
        ))
    } else {
        None
    };
    let mut observer = if opts.frames > 1 {
        LogObserver::with_interval(Duration::from_secs(1))
    } else {
        LogObserver::new()
    };

    return thread::scope(|s| {
        let consumer = s.spawn(|| consume_frames(&buffer, sinks, reporter, resolution));
        let rendered = session.run(
            control.as_mut().map(|c| c as &mut dyn ControlChannel),
            &buffer,
            &mut observer,
        );
        let consumed = consumer
            .join()
            .unwrap_or_else(|e| std::panic::resume_unwind(e));
        let frames = rendered?;
        consumed?;
        Ok(frames)
    });
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    if !opts.quiet {
        let nthreads = available_parallelism().map(|n| n.get()).unwrap_or(1);
        let version = env!("CARGO_PKG_VERSION");
        println!("tilesplat version {} [Detected {} cores]", version, nthreads);
        println!();
    }

    match render(&opts) {
        Ok(frames) => {
            if !opts.quiet {
                println!("Rendered {} frame(s)", frames);
            }
        }
        Err(e) => {
            error!("{}", e);
            process::exit(-1);
        }
    }
}
