use std::process::ExitCode;
use std::time::Duration;

use clock_face::cli::{parse_reading, Cli};
use clock_face::prelude::*;

/// Always hands back the same reading; used for `--at`.
struct FixedClock(ClockReading);

impl TimeSource for FixedClock {
    fn now(&self) -> Result<ClockReading, FaceError> {
        Ok(self.0)
    }
}

fn main() -> ExitCode {
    let cliopts = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cliopts.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(&cliopts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            err.into()
        }
    }
}

fn run(cliopts: &Cli) -> Result<(), FaceError> {
    let shape: Shape = cliopts.shape.into();
    let config = FaceConfig::new(shape, cliopts.color_mode());

    let (width, height) = match shape {
        Shape::Rectangular => (144, 168),
        Shape::Circular => (180, 180),
    };
    let mut surface = BufferSurface::new(width, height);

    if let Some(at) = &cliopts.at {
        let clock = FixedClock(parse_reading(at)?);
        render_frame(&config, &mut surface, &clock)?;
        return Ok(());
    }

    let clock = SystemClock;
    loop {
        // A failed time read skips the frame and leaves the previous one up.
        match render_frame(&config, &mut surface, &clock) {
            Ok(reading) => debug!(
                "rendered {:02}:{:02}:{:02}",
                reading.hour, reading.minute, reading.second
            ),
            Err(err) => warn!("skipping frame: {}", err),
        }
        if cliopts.once {
            return Ok(());
        }
        std::thread::sleep(Duration::from_secs(1));
    }
}

fn render_frame<T: TimeSource>(
    config: &FaceConfig,
    surface: &mut BufferSurface,
    clock: &T,
) -> Result<ClockReading, FaceError> {
    surface.fill(Color::BLACK);
    let reading = config.render(surface, clock)?;
    print_frame(surface);
    Ok(reading)
}

// Downsampled ASCII rasterization. Terminal cells are roughly twice as tall
// as they are wide, so the vertical step is double the horizontal one.
fn print_frame(surface: &BufferSurface) {
    const X_STEP: u32 = 2;
    const Y_STEP: u32 = 4;
    const RAMP: &[u8] = b" .:*#@";

    let bounds = surface.bounds();
    let mut frame = String::from("\x1b[2J\x1b[H");
    for y in (0..bounds.height).step_by(Y_STEP as usize) {
        for x in (0..bounds.width).step_by(X_STEP as usize) {
            // Brightest pixel in the cell wins.
            let mut luma = 0usize;
            for sy in y..(y + Y_STEP).min(bounds.height) {
                for sx in x..(x + X_STEP).min(bounds.width) {
                    luma = luma.max(surface.pixel(sx, sy).luma() as usize);
                }
            }
            frame.push(RAMP[luma * (RAMP.len() - 1) / 255] as char);
        }
        frame.push('\n');
    }
    print!("{}", frame);
}
