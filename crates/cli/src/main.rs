use std::path::PathBuf;
use std::process;

use clap::Parser;

use facedetect_core::detection::infrastructure::grpc_face_detector::GrpcFaceDetector;
use facedetect_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use facedetect_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use facedetect_core::pipeline::annotate_image_use_case::{
    AnnotateImageUseCase, AnnotationReport, ReportFn,
};
use facedetect_core::rendering::infrastructure::overlay_renderer::OverlayRenderer;

/// Send an image to a face detection service and draw the detected faces.
#[derive(Parser, Debug)]
#[command(name = "facedetect")]
struct Cli {
    /// Detection service address (host:port or http://host:port).
    address: String,

    /// Input image file, sent to the service and used as the canvas.
    input: PathBuf,

    /// Output image file; format is taken from the extension.
    output: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let detector = GrpcFaceDetector::connect(&cli.address)?;
    log::info!("Connected to {}", detector.endpoint());

    let mut use_case = AnnotateImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(detector),
        Box::new(OverlayRenderer::new()),
        Some(print_report()),
    );
    use_case.execute(&cli.input, &cli.output)?;

    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

/// Prints the timing line as soon as the call returns, so it shows up
/// even if decoding or writing the output fails afterwards.
fn print_report() -> ReportFn {
    Box::new(|report: &AnnotationReport| println!("{}", report.summary()))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    Ok(())
}
