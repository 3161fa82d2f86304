use anyhow::Result;

use sandbox_engine::core::{App, AppControl, FrameCtx, InitCtx};
use sandbox_engine::device::GpuInit;
use sandbox_engine::logging::{init_logging, LoggingConfig};
use sandbox_engine::render::QuadRenderer;
use sandbox_engine::shader::ShaderSource;
use sandbox_engine::window::{Runtime, RuntimeConfig};

const SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/shaders/basic.shader");

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

#[derive(Default)]
struct QuadApp {
    quad: Option<QuadRenderer>,
}

impl App for QuadApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_, '_>) -> Result<()> {
        let info = ctx.gpu.adapter_info();
        println!("{} ({:?}, {})", info.name, info.backend, info.driver_info);

        self.quad = Some(QuadRenderer::new(&ctx.render_ctx()));

        // Read and echoed only; the quad draws with the built-in pipeline.
        let source = ShaderSource::load(SHADER_PATH)?;
        source.echo();
        log::info!(
            "shader source {} read ({} lines, not compiled)",
            source.origin().display(),
            source.lines().len()
        );

        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(quad) = self.quad.as_mut() else {
            return AppControl::Continue;
        };

        ctx.render(CLEAR, |rctx, target| quad.draw(rctx, target))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        QuadApp::default(),
    )
}
