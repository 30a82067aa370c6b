use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use mono_render::{
    draw_text_centered, encode_1bit, encode_base64, text_height, BmpInfo, Canvas, Dictionary,
    EdgeMode, FitMode, GameConfig, ImageConverter, ImportOptions, Transcript, WordleEngine,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive the monochrome display demos from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play Wordle with one transcript per stdin line
    Wordle(WordleArgs),
    /// Convert an image to a 1-bit bitmap
    View(ViewArgs),
    /// Convert an animation (GIF or directory of frames) to bitmap frame files
    Animate(AnimateArgs),
    /// Render centred text to a 1-bit bitmap
    Text(TextArgs),
}

#[derive(Args, Debug, Clone, Copy)]
struct DisplaySize {
    /// Display width in pixels
    #[arg(long, env = "MONOFRAME_WIDTH", default_value_t = 526)]
    width: u16,
    /// Display height in pixels
    #[arg(long, env = "MONOFRAME_HEIGHT", default_value_t = 100)]
    height: u16,
}

#[derive(Parser, Debug)]
struct WordleArgs {
    /// User id the transcripts belong to
    #[arg(long, default_value = "local")]
    user: String,
    /// Seed for reproducible target words
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 6)]
    max_guesses: usize,
    /// Word list with one target per line, replacing the built-in list
    #[arg(long)]
    words: Option<PathBuf>,
    /// Directory receiving frame_NNNN.bmp after each change
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Print each changed frame as base64 on stdout
    #[arg(long, default_value_t = false)]
    base64: bool,
    #[command(flatten)]
    size: DisplaySize,
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Input image path
    input: PathBuf,
    /// Output bitmap path
    #[arg(short, long)]
    output: PathBuf,
    /// Read the written file back and print its header
    #[arg(long, default_value_t = false)]
    verify: bool,
    #[command(flatten)]
    size: DisplaySize,
    #[command(flatten)]
    settings: ImportSettings,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input animation path (GIF file or directory of images)
    input: PathBuf,
    /// Output directory for frame files
    #[arg(short, long)]
    out_dir: PathBuf,
    #[command(flatten)]
    size: DisplaySize,
    #[command(flatten)]
    settings: ImportSettings,
}

#[derive(Parser, Debug)]
struct TextArgs {
    text: String,
    /// Output bitmap path
    #[arg(short, long)]
    output: PathBuf,
    /// Integer glyph scale
    #[arg(long, default_value_t = 2)]
    scale: u8,
    /// White text on black instead of black on white
    #[arg(long, default_value_t = false)]
    invert: bool,
    #[command(flatten)]
    size: DisplaySize,
}

#[derive(Args, Debug, Clone)]
struct ImportSettings {
    /// Brightness adjustment (-255..255)
    #[arg(long, default_value_t = 0.0)]
    brightness: f32,
    /// Contrast adjustment (-255..255)
    #[arg(long, default_value_t = 0.0)]
    contrast: f32,
    /// Luminance (0.0 - 1.0) at or above which a pixel is lit
    #[arg(long, default_value_t = 0.5)]
    threshold: f32,
    /// Invert luminance before thresholding
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// How the image is fitted to the display
    #[arg(long, value_enum, default_value = "contain")]
    fit: FitChoice,
    /// Edge detection strategy
    #[arg(long, value_enum, default_value = "none")]
    edge: EdgeChoice,
    /// Sobel edge threshold (0.0 - 1.0)
    #[arg(long, default_value_t = 0.2)]
    sobel_threshold: f32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FitChoice {
    Contain,
    Stretch,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum EdgeChoice {
    None,
    Sobel,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Wordle(args) => wordle(args),
        Commands::View(args) => view(args),
        Commands::Animate(args) => animate(args),
        Commands::Text(args) => text(args),
    }
}

fn wordle(args: WordleArgs) -> Result<()> {
    let config = GameConfig {
        max_guesses: args.max_guesses,
        canvas_width: args.size.width,
        canvas_height: args.size.height,
        seed: args.seed,
        ..GameConfig::default()
    };

    let mut engine = match &args.words {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open word list {path:?}"))?;
            let dictionary = Dictionary::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to load word list {path:?}"))?;
            info!("loaded {} target words from {path:?}", dictionary.targets().len());
            WordleEngine::with_dictionary(Arc::new(dictionary), config)
        },
        None => WordleEngine::new(config),
    };

    if let Some(out_dir) = &args.out_dir {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create output directory {out_dir:?}"))?;
    }

    let mut frame_index = 0;
    emit_frame(&mut engine, &args, &mut frame_index)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let transcript = match line.strip_prefix('~') {
            Some(interim) => Transcript::interim(interim),
            None => Transcript::final_text(line),
        };

        if engine.process_transcript(&args.user, &transcript) {
            emit_frame(&mut engine, &args, &mut frame_index)?;
        } else {
            debug!("no change for {:?}", transcript.text);
        }
    }

    engine.delete_session(&args.user);
    Ok(())
}

fn emit_frame(engine: &mut WordleEngine, args: &WordleArgs, frame_index: &mut usize) -> Result<()> {
    let canvas = engine.render_canvas(&args.user);

    if let Some(out_dir) = &args.out_dir {
        let path = out_dir.join(format!("frame_{:04}.bmp", frame_index));
        write_bitmap(&path, &canvas)?;
    }
    if args.base64 {
        println!("{}", encode_base64(&canvas));
    }

    *frame_index += 1;
    Ok(())
}

fn view(args: ViewArgs) -> Result<()> {
    let converter = ImageConverter::new(args.size.width, args.size.height);
    let options = args.settings.to_options();
    let canvas = converter
        .convert_path(&args.input, &options)
        .with_context(|| format!("failed to convert {:?}", args.input))?;

    write_bitmap(&args.output, &canvas)?;

    if args.verify {
        let bytes =
            fs::read(&args.output).with_context(|| format!("failed to read {:?}", args.output))?;
        let header = BmpInfo::parse(&bytes)
            .with_context(|| format!("invalid bitmap written to {:?}", args.output))?;
        println!("{header:?}");
    }
    Ok(())
}

fn animate(args: AnimateArgs) -> Result<()> {
    let converter = ImageConverter::new(args.size.width, args.size.height);
    let options = args.settings.to_options();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let series = converter
        .convert_frames(&args.input, &options)
        .with_context(|| format!("failed to load frames from {:?}", args.input))?;

    let progress = ProgressBar::new(series.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames",
        )?
        .progress_chars("=> "),
    );

    for (index, frame) in series.frames().enumerate() {
        let frame_path = args.out_dir.join(format!("frame_{:04}.bmp", index));
        write_bitmap(&frame_path, &frame.canvas)?;
        debug!("frame {index} shows for {:?}", frame.delay);
        progress.inc(1);
    }

    progress.finish_with_message(format!(
        "Frames written to {:?} (loop {:?})",
        args.out_dir,
        series.total_duration()
    ));
    Ok(())
}

fn text(args: TextArgs) -> Result<()> {
    let mut canvas = Canvas::new(args.size.width, args.size.height);
    let center_x = i32::from(args.size.width) / 2;
    let y = (i32::from(args.size.height) - text_height(args.scale)) / 2;
    draw_text_centered(&mut canvas, &args.text, center_x, y, args.scale, true);

    // Lit pixels are white on the display.
    if !args.invert {
        canvas.invert();
    }

    write_bitmap(&args.output, &canvas)
}

fn write_bitmap(path: &Path, canvas: &Canvas) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("failed to create {path:?}"))?;
    file.write_all(&encode_1bit(canvas)).with_context(|| format!("failed to write {path:?}"))?;
    Ok(())
}

impl ImportSettings {
    fn to_options(&self) -> ImportOptions {
        ImportOptions {
            invert: self.invert,
            brightness: self.brightness,
            contrast: self.contrast,
            threshold: self.threshold.clamp(0.0, 1.0),
            edge_mode: self.edge.to_mode(self),
            fit: self.fit.to_mode(),
        }
    }
}

impl FitChoice {
    fn to_mode(self) -> FitMode {
        match self {
            FitChoice::Contain => FitMode::Contain,
            FitChoice::Stretch => FitMode::Stretch,
        }
    }
}

impl EdgeChoice {
    fn to_mode(self, settings: &ImportSettings) -> EdgeMode {
        match self {
            EdgeChoice::None => EdgeMode::None,
            EdgeChoice::Sobel => EdgeMode::Sobel { threshold: settings.sobel_threshold },
        }
    }
}
