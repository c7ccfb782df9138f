mod context;
mod logging;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use context::{ContextOptions, GLVersion, GlfwContext};
use learngl_runtime::frame::{FrameLoop, FrameRenderer};
use learngl_runtime_gl::scene::{ClearScene, TexturedQuadScene, TriangleScene};
use learngl_runtime_gl::SceneOptions;
use logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    demo: Option<Demo>,
    /// The directory to load shaders and textures from.
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,
    /// The OpenGL core profile version to request, as MAJOR.MINOR.
    #[arg(long, default_value_t = GLVersion(3, 3))]
    gl_version: GLVersion,
    /// Initial window width in pixels.
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Initial window height in pixels.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// Check for GL errors after every frame and log driver debug output.
    #[arg(long)]
    validate: bool,
    /// Log filter in `env_logger` syntax. Falls back to `RUST_LOG`, then `info`.
    #[arg(long)]
    log_filter: Option<String>,
}

#[derive(Subcommand, Debug, Copy, Clone, Default, Eq, PartialEq)]
enum Demo {
    /// Open a window and clear it every frame.
    Window,
    /// Draw two triangles from one vertex buffer.
    Triangle,
    /// Draw a textured quad that spins around its center.
    #[default]
    Transform,
}

impl Args {
    fn context_options(&self) -> ContextOptions {
        ContextOptions {
            version: self.gl_version,
            width: self.width,
            height: self.height,
            validate: self.validate,
            ..ContextOptions::default()
        }
    }

    fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            assets: self.assets.clone(),
            validate: self.validate,
            ..SceneOptions::default()
        }
    }
}

fn run_scene(context: &mut GlfwContext, scene: impl FrameRenderer) -> usize {
    log::info!("entering frame loop");
    FrameLoop::new().run(context, scene)
}

fn run(args: &Args) -> anyhow::Result<usize> {
    let demo = args.demo.unwrap_or_default();
    let mut context =
        GlfwContext::new(&args.context_options()).context("failed to set up the window")?;

    let gl = Arc::clone(&context.gl);
    let options = args.scene_options();

    let frames = match demo {
        Demo::Window => run_scene(&mut context, ClearScene::new(&gl, &options)),
        Demo::Triangle => {
            let scene = TriangleScene::new(&gl, &options).context("failed to build triangles")?;
            run_scene(&mut context, scene)
        }
        Demo::Transform => {
            let scene = TexturedQuadScene::load(&gl, &options)
                .context("failed to load the textured quad")?;
            run_scene(&mut context, scene)
        }
    };

    Ok(frames)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    match run(&args) {
        Ok(frames) => {
            log::info!("window closed after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
